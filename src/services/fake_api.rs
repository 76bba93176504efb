//! Scripted `ReservationApi` for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::AppError;
use crate::models::day_info::DayInfoResponse;
use crate::models::session::LoginPayload;
use crate::services::api_client::ReservationApi;

#[derive(Default)]
pub struct FakeApi {
    pub login_results: RefCell<VecDeque<Result<LoginPayload, AppError>>>,
    pub day_info_results: RefCell<VecDeque<Result<DayInfoResponse, AppError>>>,
    pub login_calls: RefCell<Vec<String>>,
    pub day_info_calls: RefCell<Vec<(NaiveDate, Value)>>,
}

impl FakeApi {
    pub fn with_login(result: Result<LoginPayload, AppError>) -> Self {
        let api = Self::default();
        api.login_results.borrow_mut().push_back(result);
        api
    }

    pub fn with_day_info(result: Result<DayInfoResponse, AppError>) -> Self {
        let api = Self::default();
        api.day_info_results.borrow_mut().push_back(result);
        api
    }
}

impl ReservationApi for FakeApi {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginPayload, AppError> {
        self.login_calls.borrow_mut().push(email.to_string());
        self.login_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Auth("no scripted response".into())))
    }

    async fn fetch_day_info(&self, date: NaiveDate, credential: &Value) -> Result<DayInfoResponse, AppError> {
        self.day_info_calls.borrow_mut().push((date, credential.clone()));
        self.day_info_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Fetch("no scripted response".into())))
    }
}
