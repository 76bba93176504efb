// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// Two POST calls against the DeepStation gateway. No retries, no timeout
// override: one request per call.
// ============================================================================

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::day_info::{DayInfoRequest, DayInfoResponse};
use crate::models::session::LoginPayload;
use crate::models::auth::LoginRequest;
use crate::utils::date::format_date;

/// Calls the reservation gateway exposes
#[allow(async_fn_in_trait)]
pub trait ReservationApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginPayload, AppError>;

    async fn fetch_day_info(&self, date: NaiveDate, credential: &Value) -> Result<DayInfoResponse, AppError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    login_url: String,
    day_info_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            login_url: CONFIG.login_url(),
            day_info_url: CONFIG.day_info_url(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginPayload, AppError> {
        log::info!("🔐 Logging in as {}", email);

        let response = Request::post(&self.login_url)
            .json(&LoginRequest::new(email, password))
            .map_err(|e| AppError::Auth(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(AppError::Auth(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let payload = response
            .json::<LoginPayload>()
            .await
            .map_err(|e| AppError::Auth(format!("Parse error: {}", e)))?;

        log::info!("✅ Login accepted");
        Ok(payload)
    }

    async fn fetch_day_info(&self, date: NaiveDate, credential: &Value) -> Result<DayInfoResponse, AppError> {
        let date = format_date(date);
        log::info!("📅 Fetching day info for {}", date);

        let request = DayInfoRequest {
            date: date.clone(),
            cookies: credential.clone(),
        };

        let response = Request::post(&self.day_info_url)
            .json(&request)
            .map_err(|e| AppError::Fetch(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Network error: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Fetch(format!("HTTP error {}: {}", status, error_text)));
        }

        let day_info = response
            .json::<DayInfoResponse>()
            .await
            .map_err(|e| AppError::Fetch(format!("Parse error: {}", e)))?;

        log::info!(
            "✅ Day info for {}: {} half-slots",
            date,
            day_info.remain_buoys().map_or(0, |b| b.len())
        );
        Ok(day_info)
    }
}
