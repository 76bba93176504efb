pub mod api_client;
pub mod auth_service;

#[cfg(test)]
pub mod fake_api;

pub use api_client::{ApiClient, ReservationApi};
pub use auth_service::{perform_login, perform_logout};
