pub mod use_day_info;
pub mod use_login;

pub use use_day_info::{use_day_info, UseDayInfoHandle};
pub use use_login::{use_login, UseLoginHandle};
