use crate::error::AppError;
use crate::models::session::SessionRecord;
use crate::services::api_client::ReservationApi;
use crate::stores::SessionStore;
use crate::utils::date::Clock;
use crate::utils::storage::KeyValueStorage;
use crate::utils::validation::is_valid_email;

/// Validates the email, calls the login endpoint and persists the session.
/// Nothing is written unless the endpoint accepted the credentials.
pub async fn perform_login<A, S, C>(
    api: &A,
    store: &SessionStore<S, C>,
    email: &str,
    password: &str,
) -> Result<SessionRecord, AppError>
where
    A: ReservationApi,
    S: KeyValueStorage,
    C: Clock,
{
    if !is_valid_email(email) {
        return Err(AppError::InvalidEmail);
    }

    let payload = api.login(email, password).await?;
    store.write(payload)
}

/// Ends the session unconditionally
pub fn perform_logout<S: KeyValueStorage, C: Clock>(store: &SessionStore<S, C>) {
    log::info!("👋 Logout");
    store.clear();
}
