// ============================================================================
// APP ERROR - error taxonomy shared by services and view models
// ============================================================================
// The `String` payloads carry transport detail for the logs only. What the
// user sees always comes from `user_message()`.
// ============================================================================

use thiserror::Error;

use crate::utils::messages;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Login endpoint rejected the credentials or could not be reached
    #[error("login failed: {0}")]
    Auth(String),

    /// Day-info call failed (network, non-2xx or undecodable body)
    #[error("day-info request failed: {0}")]
    Fetch(String),

    #[error("invalid email address")]
    InvalidEmail,

    /// Stored session has no credential to forward to the day-info endpoint
    #[error("session record carries no credential")]
    MissingCredential,

    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Auth(_) => messages::LOGIN_FAILED,
            AppError::Fetch(_) => messages::FETCH_FAILED,
            AppError::InvalidEmail => messages::INVALID_EMAIL,
            AppError::MissingCredential => messages::MISSING_CREDENTIAL,
            AppError::Storage(_) => messages::LOGIN_FAILED,
        }
    }
}
