// ============================================================================
// USE LOGIN HOOK
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::LoginForm;
use crate::viewmodels::LoginViewModel;

#[derive(Clone)]
pub struct UseLoginHandle {
    pub loading: bool,
    pub error: Option<&'static str>,
    pub submit: Callback<LoginForm>,
}

#[hook]
pub fn use_login(on_success: Callback<()>) -> UseLoginHandle {
    let loading = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    // Already logged in: skip the form
    {
        let on_success = on_success.clone();
        use_effect_with((), move |_| {
            if LoginViewModel::new().is_already_authenticated() {
                log::info!("✅ Existing session found, skipping login");
                on_success.emit(());
            }
            || ()
        });
    }

    let submit = {
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |form: LoginForm| {
            if *loading {
                return;
            }
            loading.set(true);
            error.set(None);

            let loading = loading.clone();
            let error = error.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match LoginViewModel::new().login(&form.email, &form.password).await {
                    Ok(_) => {
                        log::info!("✅ Login successful");
                        loading.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e.user_message()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    UseLoginHandle {
        loading: *loading,
        error: *error,
        submit,
    }
}
