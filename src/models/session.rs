use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::day_info::lenient;
use crate::utils::constants::CREDENTIAL_FIELD;

/// Whatever the login endpoint returned; kept opaque
pub type LoginPayload = Map<String, Value>;

/// Persisted proof of login: `{...loginPayload, loginTime, expiresAt}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: LoginPayload,
}

impl SessionRecord {
    pub fn new(mut payload: LoginPayload, login_time: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        // Our own timestamps win over same-named payload fields
        payload.remove("loginTime");
        payload.remove("expiresAt");
        Self {
            login_time: Some(login_time),
            expires_at,
            payload,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Opaque credential forwarded with every day-info request
    pub fn credential(&self) -> Option<&Value> {
        self.payload
            .get(CREDENTIAL_FIELD)
            .filter(|value| !value.is_null())
    }
}
