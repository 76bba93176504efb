// ============================================================================
// DATE UTILS - calendar-day helpers (no time of day, local clock only)
// ============================================================================

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc, Weekday};

use crate::utils::constants::DATE_FORMAT;

/// Source of "now"; swapped for a fixed instant in tests
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day according to the local clock
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

pub fn today() -> NaiveDate {
    SystemClock.today()
}

/// Parses a strict `YYYY-MM-DD` string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Offsets a date by `days` (negative goes back), saturating at the calendar bounds
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|offset| date.checked_add_signed(offset))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Strictly earlier calendar day
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
        Weekday::Sun => "일요일",
    }
}

/// `2024-12-25 (수요일)`
pub fn format_with_weekday(date: NaiveDate) -> String {
    format!("{} ({})", format_date(date), weekday_name(date.weekday()))
}
