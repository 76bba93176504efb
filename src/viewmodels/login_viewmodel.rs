// ============================================================================
// LOGIN VIEWMODEL - login form logic
// ============================================================================

use crate::error::AppError;
use crate::models::session::SessionRecord;
use crate::services::api_client::{ApiClient, ReservationApi};
use crate::services::auth_service::perform_login;
use crate::stores::SessionStore;
use crate::utils::date::{Clock, SystemClock};
use crate::utils::storage::{BrowserStorage, KeyValueStorage};

pub struct LoginViewModel<A = ApiClient, S = BrowserStorage, C = SystemClock> {
    api: A,
    store: SessionStore<S, C>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::with_parts(ApiClient::new(), SessionStore::browser())
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ReservationApi, S: KeyValueStorage, C: Clock> LoginViewModel<A, S, C> {
    pub fn with_parts(api: A, store: SessionStore<S, C>) -> Self {
        Self { api, store }
    }

    /// A still-valid session skips the login form
    pub fn is_already_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AppError> {
        let result = perform_login(&self.api, &self.store, email, password).await;
        if let Err(e) = &result {
            log::error!("❌ {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;
    use crate::utils::date::FixedClock;
    use crate::utils::messages;
    use crate::utils::storage::MemoryStorage;
    use chrono::{DateTime, Duration, Utc};
    use serde_json::json;

    const KEY: &str = "deepstation_auth";

    fn vm(api: FakeApi, storage: &MemoryStorage) -> LoginViewModel<FakeApi, MemoryStorage, FixedClock> {
        let store = SessionStore::new(
            storage.clone(),
            FixedClock::at("2025-08-10T08:00:00Z".parse().unwrap()),
            KEY,
            Duration::minutes(60),
        );
        LoginViewModel::with_parts(api, store)
    }

    #[tokio::test]
    async fn successful_login_persists_session() {
        let storage = MemoryStorage::new();
        let payload = json!({ "cookies": ["sid=xyz"] }).as_object().cloned().unwrap();
        let model = vm(FakeApi::with_login(Ok(payload)), &storage);

        let record = model.login("diver@example.com", "secret").await.unwrap();
        assert_eq!(record.credential(), Some(&json!(["sid=xyz"])));
        let expected: DateTime<Utc> = "2025-08-10T09:00:00Z".parse().unwrap();
        assert_eq!(record.expires_at, expected);
        assert!(storage.contains(KEY));
        assert!(model.is_already_authenticated());
    }

    #[tokio::test]
    async fn rejected_login_writes_nothing() {
        let storage = MemoryStorage::new();
        let model = vm(FakeApi::with_login(Err(AppError::Auth("HTTP 401".into()))), &storage);

        let err = model.login("diver@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), messages::LOGIN_FAILED);
        assert!(!storage.contains(KEY));
        assert!(!model.is_already_authenticated());
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_endpoint() {
        let storage = MemoryStorage::new();
        let model = vm(FakeApi::default(), &storage);

        assert_eq!(model.login("not-an-email", "pw").await, Err(AppError::InvalidEmail));
        assert!(model.api.login_calls.borrow().is_empty());
        assert!(!storage.contains(KEY));
    }
}
