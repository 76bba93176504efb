// ============================================================================
// APP - top-level screen switch
// ============================================================================
// Two screens and no router: the schedule screen redirects to login when the
// session is missing, the login screen hands back once a session exists.
// ============================================================================

use yew::prelude::*;

use crate::views::auth::LoginView;
use crate::views::schedule::HomeView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Schedule,
}

#[function_component(App)]
pub fn app() -> Html {
    let screen = use_state(|| Screen::Schedule);

    let show_login = {
        let screen = screen.clone();
        Callback::from(move |_| {
            log::info!("🔒 Showing login screen");
            screen.set(Screen::Login);
        })
    };

    let show_schedule = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Schedule))
    };

    match *screen {
        Screen::Login => html! { <LoginView on_logged_in={show_schedule} /> },
        Screen::Schedule => html! { <HomeView on_logged_out={show_login} /> },
    }
}
