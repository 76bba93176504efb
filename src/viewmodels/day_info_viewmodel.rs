// ============================================================================
// DAY INFO VIEWMODEL - schedule page logic
// ============================================================================
// Returns values only; the `use_day_info` hook turns them into state
// transitions and URL updates.
// ============================================================================

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::day_info::DayInfoResponse;
use crate::models::session::SessionRecord;
use crate::services::api_client::{ApiClient, ReservationApi};
use crate::services::auth_service::perform_logout;
use crate::state::day_info_state::{resolve_selected_date, ResolvedDate};
use crate::stores::SessionStore;
use crate::utils::date::{add_days, is_before, Clock, SystemClock};
use crate::utils::storage::{BrowserStorage, KeyValueStorage};

#[derive(Clone, Debug, PartialEq)]
pub struct MountOutcome {
    pub session: Option<SessionRecord>,
    pub resolved: ResolvedDate,
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Completed(Result<DayInfoResponse, AppError>),
    /// Session ran out since the page was opened
    SessionExpired,
}

pub struct DayInfoViewModel<A = ApiClient, S = BrowserStorage, C = SystemClock> {
    api: A,
    store: SessionStore<S, C>,
}

impl DayInfoViewModel {
    pub fn new() -> Self {
        Self::with_parts(ApiClient::new(), SessionStore::browser())
    }
}

impl Default for DayInfoViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ReservationApi, S: KeyValueStorage, C: Clock> DayInfoViewModel<A, S, C> {
    pub fn with_parts(api: A, store: SessionStore<S, C>) -> Self {
        Self { api, store }
    }

    pub fn today(&self) -> NaiveDate {
        self.store.clock().today()
    }

    /// Session check plus the selected day derived from the `date` URL parameter
    pub fn mount(&self, url_date: Option<&str>) -> MountOutcome {
        let session = self.store.read_valid();
        if session.is_none() {
            log::info!("🔒 No valid session, redirecting to login");
        }
        MountOutcome {
            session,
            resolved: resolve_selected_date(url_date, self.today()),
        }
    }

    /// Re-reads the session before every request so an expiry mid-visit is noticed
    pub async fn fetch(&self, date: NaiveDate) -> FetchOutcome {
        let Some(session) = self.store.read_valid() else {
            return FetchOutcome::SessionExpired;
        };
        let Some(credential) = session.credential() else {
            return FetchOutcome::Completed(Err(AppError::MissingCredential));
        };
        FetchOutcome::Completed(self.api.fetch_day_info(date, credential).await)
    }

    /// Previous day, never earlier than today
    pub fn prev_date(&self, current: NaiveDate) -> NaiveDate {
        let today = self.today();
        let prev = add_days(current, -1);
        if is_before(prev, today) {
            today
        } else {
            prev
        }
    }

    pub fn next_date(&self, current: NaiveDate) -> NaiveDate {
        add_days(current, 1)
    }

    /// Date typed into the picker, normalized like a URL parameter
    pub fn pick_date(&self, value: &str) -> ResolvedDate {
        resolve_selected_date(Some(value), self.today())
    }

    pub fn logout(&self) {
        perform_logout(&self.store);
    }
}
