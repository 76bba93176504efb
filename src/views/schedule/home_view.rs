use yew::prelude::*;

use super::{DateNavigator, ReservationTable};
use crate::hooks::use_day_info;
use crate::state::day_info_state::SessionPhase;
use crate::utils::messages;
use crate::views::shared::Navbar;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub on_logged_out: Callback<()>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let day_info = use_day_info(props.on_logged_out.clone());
    let state = &day_info.state;

    match &state.session {
        SessionPhase::CheckingSession => html! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <p>{messages::CHECKING_SESSION}</p>
            </div>
        },
        // Redirect to login is already under way
        SessionPhase::Unauthenticated => html! {},
        SessionPhase::Authenticated(_) => {
            let loading = state.is_loading();
            let refresh_label = if loading {
                messages::REFRESHING
            } else {
                messages::REFRESH_BUTTON
            };

            html! {
                <div class="app-container">
                    <Navbar on_logout={day_info.logout.clone()} />
                    <main class="schedule">
                        if let Some(selected) = state.selected_date {
                            <DateNavigator
                                selected={selected}
                                min_date={day_info.today}
                                on_prev={day_info.prev_day.clone()}
                                on_next={day_info.next_day.clone()}
                                on_pick={day_info.pick_date.clone()}
                            />
                        }
                        <section class="schedule-card">
                            <div class="schedule-header">
                                <h3>{messages::SCHEDULE_TITLE}</h3>
                                <button
                                    class="btn-refresh"
                                    disabled={loading}
                                    onclick={day_info.refresh.reform(|_| ())}
                                >
                                    {refresh_label}
                                </button>
                            </div>
                            <ReservationTable load={state.load.clone()} />
                        </section>
                    </main>
                </div>
            }
        }
    }
}
