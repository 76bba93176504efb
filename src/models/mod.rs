pub mod auth;
pub mod day_info;
pub mod reservation;
pub mod session;

pub use auth::{LoginForm, LoginRequest};
pub use day_info::{BuoyAvailability, DayInfoData, DayInfoRequest, DayInfoResponse, RemainGen, RemainSummary};
pub use reservation::{build_slot_rows, Half, HalfSlot, SlotRow};
pub use session::{LoginPayload, SessionRecord};
