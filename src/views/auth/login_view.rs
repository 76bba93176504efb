use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_login;
use crate::models::LoginForm;
use crate::utils::messages;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_logged_in: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let login = use_login(props.on_logged_in.clone());
    let form = use_state(LoginForm::default);

    let on_email_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let submit = login.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit((*form).clone());
        })
    };

    let button_label = if login.loading {
        messages::LOGIN_IN_PROGRESS
    } else {
        messages::LOGIN_BUTTON
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🤿"}</div>
                    </div>
                    <h1>{messages::APP_TITLE}</h1>
                    <p>{messages::LOGIN_SUBTITLE}</p>
                </div>

                <p class="login-greeting">{messages::LOGIN_GREETING}</p>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <input
                            type="email"
                            id="email"
                            name="email"
                            autocomplete="email"
                            placeholder={messages::EMAIL_PLACEHOLDER}
                            value={form.email.clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder={messages::PASSWORD_PLACEHOLDER}
                            value={form.password.clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    if let Some(error) = login.error {
                        <div class="error-banner">
                            <p>{error}</p>
                        </div>
                    }

                    <button type="submit" class="btn-login" disabled={login.loading}>
                        <span class="btn-text">{button_label}</span>
                    </button>

                    <p class="login-footer">{messages::LOGIN_PRIVACY_NOTE}</p>
                </form>
            </div>
        </div>
    }
}
