// ============================================================================
// SESSION STORE - the single persisted login record and its expiry
// ============================================================================
// Any read that finds the record expired, malformed or missing `expiresAt`
// deletes it. Callers only ever see a valid record or nothing.
// ============================================================================

use chrono::Duration;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::session::{LoginPayload, SessionRecord};
use crate::utils::constants::STORAGE_KEY_AUTH;
use crate::utils::date::{Clock, SystemClock};
use crate::utils::storage::{BrowserStorage, KeyValueStorage};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore<S = BrowserStorage, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    ttl: Duration,
}

impl SessionStore {
    /// Store backed by `localStorage` and the system clock
    pub fn browser() -> Self {
        Self::new(
            BrowserStorage,
            SystemClock,
            STORAGE_KEY_AUTH,
            Duration::minutes(CONFIG.session_ttl_minutes),
        )
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::browser()
    }
}

impl<S: KeyValueStorage, C: Clock> SessionStore<S, C> {
    pub fn new(storage: S, clock: C, key: &str, ttl: Duration) -> Self {
        Self {
            storage,
            clock,
            key: key.to_string(),
            ttl,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Loads the record; purges and returns `None` unless it is still valid
    pub fn read_valid(&self) -> Option<SessionRecord> {
        let raw = self.storage.get_item(&self.key)?;

        let record = match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("⚠️ Discarding unreadable session record: {}", e);
                self.storage.remove_item(&self.key);
                return None;
            }
        };

        if record.is_expired_at(self.clock.now()) {
            log::info!("⌛ Session expired at {}, clearing", record.expires_at);
            self.storage.remove_item(&self.key);
            return None;
        }

        Some(record)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_valid().is_some()
    }

    /// Persists `payload` stamped with `loginTime = now` and `expiresAt = now + ttl`
    pub fn write(&self, payload: LoginPayload) -> Result<SessionRecord, AppError> {
        let now = self.clock.now();
        let record = SessionRecord::new(payload, now, now + self.ttl);

        let json = serde_json::to_string(&record)
            .map_err(|e| AppError::Storage(format!("could not serialize session: {}", e)))?;
        self.storage.set_item(&self.key, &json)?;

        log::info!("💾 Session saved, valid until {}", record.expires_at);
        Ok(record)
    }

    pub fn clear(&self) {
        self.storage.remove_item(&self.key);
        log::info!("🗑️ Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::FixedClock;
    use crate::utils::storage::MemoryStorage;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    const KEY: &str = "deepstation_auth";

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn store_at(storage: &MemoryStorage, now: &str) -> SessionStore<MemoryStorage, FixedClock> {
        SessionStore::new(
            storage.clone(),
            FixedClock::at(instant(now)),
            KEY,
            Duration::minutes(60),
        )
    }

    fn payload() -> LoginPayload {
        json!({ "cookies": ["PHPSESSID=abc"], "name": "instructor" })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn write_stamps_login_time_and_one_hour_expiry() {
        let storage = MemoryStorage::new();
        let store = store_at(&storage, "2025-08-01T09:00:00Z");

        let record = store.write(payload()).unwrap();
        assert_eq!(record.login_time, Some(instant("2025-08-01T09:00:00Z")));
        assert_eq!(record.expires_at, instant("2025-08-01T10:00:00Z"));

        let raw: serde_json::Value = serde_json::from_str(&storage.get_item(KEY).unwrap()).unwrap();
        assert_eq!(raw["expiresAt"], json!("2025-08-01T10:00:00Z"));
        assert_eq!(raw["cookies"], json!(["PHPSESSID=abc"]));
    }

    #[test]
    fn unexpired_record_is_returned_unchanged() {
        let storage = MemoryStorage::new();
        let written = store_at(&storage, "2025-08-01T09:00:00Z").write(payload()).unwrap();

        for now in ["2025-08-01T09:00:00Z", "2025-08-01T09:59:59Z", "2025-08-01T10:00:00Z"] {
            let store = store_at(&storage, now);
            assert_eq!(store.read_valid(), Some(written.clone()), "{}", now);
            assert!(store.is_authenticated());
        }
        assert!(storage.contains(KEY));
    }

    #[test]
    fn expired_record_is_purged() {
        let storage = MemoryStorage::new();
        store_at(&storage, "2025-08-01T09:00:00Z").write(payload()).unwrap();

        let later = store_at(&storage, "2025-08-01T10:00:01Z");
        assert_eq!(later.read_valid(), None);
        assert!(!storage.contains(KEY));
        assert!(!later.is_authenticated());
    }

    #[test]
    fn record_without_expiry_is_purged() {
        let storage = MemoryStorage::new();
        storage
            .set_item(KEY, r#"{"cookies":"sid","loginTime":"2025-08-01T09:00:00Z"}"#)
            .unwrap();

        assert_eq!(store_at(&storage, "2025-08-01T09:00:00Z").read_valid(), None);
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn malformed_json_is_purged_silently() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "{not json").unwrap();

        assert_eq!(store_at(&storage, "2025-08-01T09:00:00Z").read_valid(), None);
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn unreadable_login_time_keeps_an_unexpired_session() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                KEY,
                r#"{"cookies":"sid","loginTime":"Fri Aug 01 2025","expiresAt":"2030-01-01T00:00:00.000Z"}"#,
            )
            .unwrap();

        let record = store_at(&storage, "2025-08-01T09:00:00Z").read_valid();
        assert!(record.is_some_and(|r| r.login_time.is_none()));
        assert!(storage.contains(KEY));
    }

    #[test]
    fn clear_removes_a_valid_record() {
        let storage = MemoryStorage::new();
        let store = store_at(&storage, "2025-08-01T09:00:00Z");
        store.write(payload()).unwrap();

        store.clear();
        assert!(!store.is_authenticated());
        assert!(!storage.contains(KEY));
    }
}
