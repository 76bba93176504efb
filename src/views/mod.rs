pub mod app;
pub mod auth;
pub mod schedule;
pub mod shared;

pub use app::App;
