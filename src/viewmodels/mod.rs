pub mod day_info_viewmodel;
pub mod login_viewmodel;

pub use day_info_viewmodel::{DayInfoViewModel, FetchOutcome, MountOutcome};
pub use login_viewmodel::LoginViewModel;
