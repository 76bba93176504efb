// ============================================================================
// USE DAY INFO HOOK - schedule page wiring
// ============================================================================
// Owns the DayInfoState reducer, keeps the `date` query parameter in sync
// with the selected day and spawns one fetch per (date, refresh) change.
// ============================================================================

use chrono::NaiveDate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::state::day_info_state::{resolve_selected_date, DayInfoAction, DayInfoState, FetchTicket};
use crate::utils::date::{self, format_date};
use crate::utils::url::{current_date_param, push_date_param, replace_date_param};
use crate::viewmodels::{DayInfoViewModel, FetchOutcome};

#[derive(Clone)]
pub struct UseDayInfoHandle {
    pub state: UseReducerHandle<DayInfoState>,
    pub today: NaiveDate,
    pub refresh: Callback<()>,
    pub prev_day: Callback<()>,
    pub next_day: Callback<()>,
    pub pick_date: Callback<String>,
    pub logout: Callback<()>,
}

fn rewrite_url(date: NaiveDate) {
    if let Err(e) = replace_date_param(&format_date(date)) {
        log::warn!("⚠️ Could not rewrite date parameter: {:?}", e);
    }
}

/// Moves to `date`, adding a history entry when it actually changes
fn navigate_to(state: &UseReducerHandle<DayInfoState>, date: NaiveDate) {
    if state.selected_date == Some(date) {
        return;
    }
    if let Err(e) = push_date_param(&format_date(date)) {
        log::warn!("⚠️ Could not push date parameter: {:?}", e);
    }
    log::info!("📅 Selected {}", date);
    state.dispatch(DayInfoAction::DateSelected(date));
}

#[hook]
pub fn use_day_info(on_unauthenticated: Callback<()>) -> UseDayInfoHandle {
    let state = use_reducer(DayInfoState::default);
    let generation = use_mut_ref(|| 0u64);
    let refresh_nonce = use_state(|| 0u32);
    let today = date::today();

    // Session check, initial date and back/forward navigation
    {
        let state = state.clone();
        let on_unauthenticated = on_unauthenticated.clone();
        use_effect_with((), move |_| {
            let outcome = DayInfoViewModel::new().mount(current_date_param().as_deref());
            let authenticated = outcome.session.is_some();
            if authenticated && outcome.resolved.rewrite_url {
                rewrite_url(outcome.resolved.date);
            }
            state.dispatch(DayInfoAction::SessionChecked {
                session: outcome.session,
                date: outcome.resolved.date,
            });
            if !authenticated {
                on_unauthenticated.emit(());
            }

            let listener = {
                let state = state.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let resolved = resolve_selected_date(current_date_param().as_deref(), date::today());
                    if resolved.rewrite_url {
                        rewrite_url(resolved.date);
                    }
                    state.dispatch(DayInfoAction::DateSelected(resolved.date));
                }) as Box<dyn FnMut(web_sys::Event)>)
            };

            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ popstate listener not installed: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    if let Err(e) = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                        log::warn!("⚠️ popstate listener not removed: {:?}", e);
                    }
                }
                drop(listener);
            }
        });
    }

    // Fetch cycle
    {
        let state = state.clone();
        let generation = generation.clone();
        let on_unauthenticated = on_unauthenticated.clone();
        let deps = (state.selected_date, state.is_authenticated(), *refresh_nonce);
        use_effect_with(deps, move |(date, authenticated, _)| {
            if let (Some(date), true) = (*date, *authenticated) {
                let ticket = {
                    let mut counter = generation.borrow_mut();
                    *counter += 1;
                    FetchTicket { generation: *counter, date }
                };
                log::info!("🔄 Fetching day info for {} (#{})", date, ticket.generation);
                state.dispatch(DayInfoAction::FetchStarted(ticket));

                spawn_local(async move {
                    match DayInfoViewModel::new().fetch(date).await {
                        FetchOutcome::Completed(result) => {
                            state.dispatch(DayInfoAction::FetchFinished(ticket, result));
                        }
                        FetchOutcome::SessionExpired => {
                            state.dispatch(DayInfoAction::LoggedOut);
                            on_unauthenticated.emit(());
                        }
                    }
                });
            }
            || ()
        });
    }

    let refresh = {
        let refresh_nonce = refresh_nonce.clone();
        Callback::from(move |_| refresh_nonce.set((*refresh_nonce).wrapping_add(1)))
    };

    let prev_day = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Some(current) = state.selected_date {
                navigate_to(&state, DayInfoViewModel::new().prev_date(current));
            }
        })
    };

    let next_day = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Some(current) = state.selected_date {
                navigate_to(&state, DayInfoViewModel::new().next_date(current));
            }
        })
    };

    let pick_date = {
        let state = state.clone();
        Callback::from(move |value: String| {
            if value.is_empty() {
                return;
            }
            let resolved = DayInfoViewModel::new().pick_date(&value);
            navigate_to(&state, resolved.date);
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            DayInfoViewModel::new().logout();
            state.dispatch(DayInfoAction::LoggedOut);
            on_unauthenticated.emit(());
        })
    };

    UseDayInfoHandle {
        state,
        today,
        refresh,
        prev_day,
        next_day,
        pick_date,
        logout,
    }
}
