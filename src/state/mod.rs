pub mod day_info_state;

pub use day_info_state::{DayInfoAction, DayInfoState, FetchTicket, LoadPhase, SessionPhase};
