// ============================================================================
// DAY INFO STATE - schedule page state machine
// ============================================================================
// CheckingSession -> (Unauthenticated | Authenticated)
// Authenticated:   Idle -> Loading -> (Loaded | Errored), re-entered on
//                  refresh or date change.
// Every fetch carries a generation number; a completion for anything but the
// latest generation is dropped so a slow, superseded request cannot overwrite
// newer state.
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::error::AppError;
use crate::models::day_info::DayInfoResponse;
use crate::models::session::SessionRecord;
use crate::utils::date::{add_days, is_before, parse_date};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    CheckingSession,
    Unauthenticated,
    Authenticated(SessionRecord),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded(DayInfoResponse),
    Errored(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub date: NaiveDate,
}

/// Selected day derived from the URL, and whether the URL must be rewritten
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub rewrite_url: bool,
}

/// Absent, unparseable or past dates roll forward to tomorrow
pub fn resolve_selected_date(param: Option<&str>, today: NaiveDate) -> ResolvedDate {
    match param.and_then(parse_date) {
        Some(date) if !is_before(date, today) => ResolvedDate {
            date,
            rewrite_url: false,
        },
        _ => ResolvedDate {
            date: add_days(today, 1),
            rewrite_url: true,
        },
    }
}

pub enum DayInfoAction {
    SessionChecked {
        session: Option<SessionRecord>,
        date: NaiveDate,
    },
    DateSelected(NaiveDate),
    FetchStarted(FetchTicket),
    FetchFinished(FetchTicket, Result<DayInfoResponse, AppError>),
    LoggedOut,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayInfoState {
    pub session: SessionPhase,
    pub selected_date: Option<NaiveDate>,
    pub load: LoadPhase,
    latest_generation: u64,
}

impl Default for DayInfoState {
    fn default() -> Self {
        Self {
            session: SessionPhase::CheckingSession,
            selected_date: None,
            load: LoadPhase::Idle,
            latest_generation: 0,
        }
    }
}

impl DayInfoState {
    pub fn session_record(&self) -> Option<&SessionRecord> {
        match &self.session {
            SessionPhase::Authenticated(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_record().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadPhase::Loading
    }

    pub fn day_info(&self) -> Option<&DayInfoResponse> {
        match &self.load {
            LoadPhase::Loaded(day_info) => Some(day_info),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.load {
            LoadPhase::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: DayInfoAction) {
        match action {
            DayInfoAction::SessionChecked { session, date } => match session {
                Some(record) => {
                    self.session = SessionPhase::Authenticated(record);
                    self.selected_date = Some(date);
                }
                None => self.log_out(),
            },
            DayInfoAction::DateSelected(date) => {
                self.selected_date = Some(date);
            }
            DayInfoAction::FetchStarted(ticket) => {
                if !self.is_authenticated() || ticket.generation <= self.latest_generation {
                    return;
                }
                self.latest_generation = ticket.generation;
                self.load = LoadPhase::Loading;
            }
            DayInfoAction::FetchFinished(ticket, result) => {
                if !self.is_authenticated() || ticket.generation != self.latest_generation {
                    log::debug!("⏭️ Dropping stale day-info result for {}", ticket.date);
                    return;
                }
                self.load = match result {
                    Ok(day_info) => LoadPhase::Loaded(day_info),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        LoadPhase::Errored(e.user_message())
                    }
                };
            }
            DayInfoAction::LoggedOut => self.log_out(),
        }
    }

    fn log_out(&mut self) {
        self.session = SessionPhase::Unauthenticated;
        self.load = LoadPhase::Idle;
    }
}

impl Reducible for DayInfoState {
    type Action = DayInfoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::messages;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> SessionRecord {
        serde_json::from_str(r#"{"cookies":"sid","expiresAt":"2030-01-01T00:00:00Z"}"#).unwrap()
    }

    fn authenticated(date: NaiveDate) -> DayInfoState {
        let mut state = DayInfoState::default();
        state.apply(DayInfoAction::SessionChecked {
            session: Some(record()),
            date,
        });
        state
    }

    fn day(raw: &str) -> DayInfoResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn past_url_date_rolls_forward_to_tomorrow() {
        let today = ymd(2025, 8, 10);
        let resolved = resolve_selected_date(Some("2025-08-01"), today);
        assert_eq!(resolved.date, ymd(2025, 8, 11));
        assert!(resolved.rewrite_url);
    }

    #[test]
    fn today_and_future_url_dates_are_kept() {
        let today = ymd(2025, 8, 10);
        assert_eq!(
            resolve_selected_date(Some("2025-08-10"), today),
            ResolvedDate { date: today, rewrite_url: false }
        );
        assert_eq!(resolve_selected_date(Some("2025-09-01"), today).date, ymd(2025, 9, 1));
    }

    #[test]
    fn absent_or_garbage_url_date_defaults_to_tomorrow() {
        let today = ymd(2025, 12, 31);
        for param in [None, Some("soon"), Some("2025-13-01")] {
            let resolved = resolve_selected_date(param, today);
            assert_eq!(resolved.date, ymd(2026, 1, 1));
            assert!(resolved.rewrite_url);
        }
    }

    #[test]
    fn missing_session_goes_unauthenticated() {
        let mut state = DayInfoState::default();
        assert_eq!(state.session, SessionPhase::CheckingSession);

        state.apply(DayInfoAction::SessionChecked {
            session: None,
            date: ymd(2025, 8, 11),
        });
        assert_eq!(state.session, SessionPhase::Unauthenticated);
        assert!(state.selected_date.is_none());
    }

    #[test]
    fn fetch_cycle_reaches_loaded_then_errored_on_refresh() {
        let date = ymd(2025, 8, 11);
        let mut state = authenticated(date);
        assert_eq!(state.load, LoadPhase::Idle);

        let first = FetchTicket { generation: 1, date };
        state.apply(DayInfoAction::FetchStarted(first));
        assert!(state.is_loading());
        state.apply(DayInfoAction::FetchFinished(first, Ok(day(r#"{"data":{}}"#))));
        assert!(state.day_info().is_some());

        let refresh = FetchTicket { generation: 2, date };
        state.apply(DayInfoAction::FetchStarted(refresh));
        assert!(state.is_loading());
        state.apply(DayInfoAction::FetchFinished(
            refresh,
            Err(AppError::Fetch("HTTP 500".into())),
        ));
        assert_eq!(state.error_message(), Some(messages::FETCH_FAILED));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = authenticated(ymd(2025, 8, 11));
        let old = FetchTicket { generation: 1, date: ymd(2025, 8, 11) };
        let new = FetchTicket { generation: 2, date: ymd(2025, 8, 12) };

        state.apply(DayInfoAction::FetchStarted(old));
        state.apply(DayInfoAction::DateSelected(new.date));
        state.apply(DayInfoAction::FetchStarted(new));

        let fresh = day(r#"{"data":{"remain_buoys":[]}}"#);
        state.apply(DayInfoAction::FetchFinished(new, Ok(fresh.clone())));
        state.apply(DayInfoAction::FetchFinished(old, Err(AppError::Fetch("late".into()))));

        assert_eq!(state.day_info(), Some(&fresh));
        assert_eq!(state.selected_date, Some(ymd(2025, 8, 12)));
    }

    #[test]
    fn logout_resets_to_unauthenticated_and_ignores_late_results() {
        let date = ymd(2025, 8, 11);
        let mut state = authenticated(date);
        let ticket = FetchTicket { generation: 1, date };
        state.apply(DayInfoAction::FetchStarted(ticket));

        state.apply(DayInfoAction::LoggedOut);
        state.apply(DayInfoAction::FetchFinished(ticket, Ok(DayInfoResponse::default())));

        assert_eq!(state.session, SessionPhase::Unauthenticated);
        assert_eq!(state.load, LoadPhase::Idle);
    }
}
