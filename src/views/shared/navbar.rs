use yew::prelude::*;

use crate::utils::messages;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <header class="app-header">
            <h1>{messages::APP_TITLE}</h1>
            <button class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                {messages::LOGOUT_BUTTON}
            </button>
        </header>
    }
}
