//! Unit tests for the account factory

use std::sync::Arc;

use chrono::Duration;

use crate::domain::value_objects::{BearerToken, CreateAccountRequest};
use crate::errors::DomainError;
use crate::services::account::AccountFactory;
use crate::services::clock::{Clock, FixedClock};

use super::mocks::*;

fn token() -> BearerToken {
    BearerToken {
        raw: "header.payload.signature".to_string(),
        subject: "juan@x.cl".to_string(),
        issued_at: start_time(),
        expires_at: start_time() + Duration::hours(1),
    }
}

fn factory() -> (AccountFactory<PrefixHasher>, Arc<PrefixHasher>) {
    let hasher = Arc::new(PrefixHasher::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(start_time()));
    (AccountFactory::new(hasher.clone(), clock), hasher)
}

#[test]
fn test_build_sets_identical_timestamps() {
    let (factory, _) = factory();
    let account = factory.build(&juan(), token()).unwrap();

    assert_eq!(account.created_at, start_time());
    assert_eq!(account.modified_at, account.created_at);
    assert_eq!(account.last_login_at, account.created_at);
    assert!(account.is_active);
}

#[test]
fn test_build_hashes_password_and_attaches_token() {
    let (factory, _) = factory();
    let account = factory.build(&juan(), token()).unwrap();

    assert_eq!(account.password_hash, "hashed:hunter123");
    assert_eq!(account.token.as_deref(), Some("header.payload.signature"));
    assert_eq!(account.email, "juan@x.cl");
}

#[test]
fn test_build_keeps_phone_order() {
    let (factory, _) = factory();
    let request = CreateAccountRequest {
        phones: vec![phone("3"), phone("1"), phone("2"), phone("1")],
        ..juan()
    };

    let account = factory.build(&request, token()).unwrap();
    let numbers: Vec<&str> = account.phones.iter().map(|p| p.number.as_str()).collect();
    assert_eq!(numbers, vec!["3", "1", "2", "1"]);
}

#[test]
fn test_build_without_phones() {
    let (factory, _) = factory();
    let request = CreateAccountRequest {
        phones: vec![],
        ..juan()
    };

    assert!(factory.build(&request, token()).unwrap().phones.is_empty());
}

#[test]
fn test_build_propagates_hasher_failure() {
    let (factory, hasher) = factory();
    hasher.fail(true);

    assert!(matches!(
        factory.build(&juan(), token()),
        Err(DomainError::Hashing { .. })
    ));
}
