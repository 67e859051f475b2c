//! Shared setup for the HTTP tests

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use ua_api::routes::accounts::AppState;
use ua_core::services::{
    AccountService, AccountServiceConfig, Clock, FixedClock, TokenService, TokenServiceConfig,
};
use ua_infra::{BcryptPasswordHasher, InMemoryAccountRepository};

pub type TestState = AppState<InMemoryAccountRepository, BcryptPasswordHasher>;

pub const TEST_SECRET: &str =
    "http-test-secret-http-test-secret-http-test-secret-http-test-0123";

pub fn state() -> web::Data<TestState> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ));
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new(TEST_SECRET, 3600), clock.clone()).unwrap(),
    );
    let service = AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        tokens,
        clock,
        AccountServiceConfig::default(),
    )
    .unwrap();

    web::Data::new(AppState::new(Arc::new(service)))
}

pub fn juan() -> Value {
    json!({
        "name": "Juan Rodriguez",
        "email": "juan@x.cl",
        "password": "hunter123",
        "phones": [{ "number": "1234567", "citycode": "1", "countrycode": "57" }]
    })
}
