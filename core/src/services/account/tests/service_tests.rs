//! Unit tests for the account lifecycle orchestrator

use std::error::Error;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{Account, Phone};
use crate::domain::value_objects::{
    ChangePasswordRequest, CreateAccountRequest, OperationMessage, PhoneInput,
    UpdateAccountRequest,
};
use crate::errors::{
    ConflictError, DomainError, NotFoundError, ValidationError, INTERNAL_ERROR_MESSAGE,
};
use crate::repositories::MockAccountRepository;
use crate::services::clock::Clock;
use crate::services::password_hasher::PasswordHasher;

use super::mocks::*;

fn stored_account(email: &str) -> Account {
    Account::new(
        "Ana Perez".to_string(),
        email.to_string(),
        "hashed:original1".to_string(),
        None,
        vec![Phone::new("5551234", "2", "56")],
        start_time() - Duration::days(1),
    )
}

fn update(name: &str, email: &str, phones: Option<Vec<PhoneInput>>) -> UpdateAccountRequest {
    UpdateAccountRequest {
        name: name.to_string(),
        email: email.to_string(),
        phones,
    }
}

fn change(password: &str, confirm: &str) -> ChangePasswordRequest {
    ChangePasswordRequest {
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

// ---- create ----

#[tokio::test]
async fn test_create_account_success() {
    let fx = Fixture::new();

    let created = fx.service.create_account(juan()).await.unwrap();

    assert!(created.is_active);
    assert_eq!(created.created, start_time());
    assert_eq!(created.modified, created.created);
    assert_eq!(created.last_login, created.created);

    let token = created.token.clone().expect("token issued on creation");
    assert!(fx.token_service.validate(&token));
    assert_eq!(fx.token_service.extract_subject(&token).unwrap(), "juan@x.cl");

    let stored = fx.repository.stored(created.id).unwrap();
    assert_eq!(stored.token.as_deref(), Some(token.as_str()));
    assert!(fx.hasher.matches("hunter123", &stored.password_hash).unwrap());
    assert_eq!(stored.phones.len(), 1);
}

#[tokio::test]
async fn test_create_same_email_twice_conflicts() {
    let fx = Fixture::new();

    fx.service.create_account(juan()).await.unwrap();
    let second = fx.service.create_account(juan()).await;

    assert!(matches!(
        second,
        Err(DomainError::Conflict(ConflictError::EmailAlreadyExists))
    ));
    assert_eq!(fx.repository.count(), 1);
}

#[tokio::test]
async fn test_create_malformed_duplicate_reports_format_first() {
    let fx = Fixture::with_repository(MockAccountRepository::with_account(stored_account(
        "juan@x",
    )));

    let request = CreateAccountRequest {
        email: "juan@x".to_string(),
        ..juan()
    };
    let result = fx.service.create_account(request).await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::InvalidEmailFormat))
    ));
    assert_eq!(fx.repository.email_lookups(), 0);
    assert_eq!(fx.repository.saves(), 0);
}

#[tokio::test]
async fn test_create_rejects_bad_password() {
    let fx = Fixture::new();
    let request = CreateAccountRequest {
        password: "abc".to_string(),
        ..juan()
    };

    assert!(matches!(
        fx.service.create_account(request).await,
        Err(DomainError::Validation(ValidationError::InvalidPasswordFormat))
    ));
    assert_eq!(fx.repository.count(), 0);
}

#[tokio::test]
async fn test_storage_conflict_on_save_stays_a_conflict() {
    // Lookup misses the competing account, the store's own constraint catches it
    let fx = Fixture::with_repository(MockAccountRepository::with_account(stored_account(
        "juan@x.cl",
    )));
    fx.repository.blind_email_lookups(true);

    let result = fx.service.create_account(juan()).await;

    assert!(matches!(
        result,
        Err(DomainError::Conflict(ConflictError::EmailAlreadyExists))
    ));
    assert_eq!(fx.repository.saves(), 1);
    assert_eq!(fx.repository.count(), 1);
}

// ---- get / list ----

#[tokio::test]
async fn test_get_account() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    let detail = fx.service.get_account(id).await.unwrap();

    assert_eq!(detail.id, id);
    assert_eq!(detail.email, "ana@x.cl");
    assert_eq!(detail.phones[0].number, "5551234");
}

#[tokio::test]
async fn test_get_unknown_account() {
    let fx = Fixture::new();

    assert!(matches!(
        fx.service.get_account(Uuid::new_v4()).await,
        Err(DomainError::NotFound(NotFoundError::AccountNotFound))
    ));
}

#[tokio::test]
async fn test_list_accounts() {
    let fx = Fixture::new();
    assert!(fx.service.list_accounts().await.unwrap().is_empty());

    fx.repository.insert(stored_account("ana@x.cl"));
    fx.repository.insert(stored_account("pedro@x.cl"));

    let mut emails: Vec<String> = fx
        .service
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|summary| summary.email)
        .collect();
    emails.sort();
    assert_eq!(emails, vec!["ana@x.cl", "pedro@x.cl"]);
}

// ---- update ----

#[tokio::test]
async fn test_update_same_email_skips_uniqueness() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    let updated = fx
        .service
        .update_account(id, update("Ana Maria", "ana@x.cl", None))
        .await
        .unwrap();

    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.modified, start_time());
    assert_eq!(fx.repository.email_lookups(), 0);
}

#[tokio::test]
async fn test_update_new_email_checks_uniqueness() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));
    fx.repository.insert(stored_account("taken@x.cl"));

    let taken = fx
        .service
        .update_account(id, update("Ana", "taken@x.cl", None))
        .await;
    assert!(matches!(
        taken,
        Err(DomainError::Conflict(ConflictError::EmailAlreadyExists))
    ));
    assert_eq!(fx.repository.stored(id).unwrap().email, "ana@x.cl");

    let free = fx
        .service
        .update_account(id, update("Ana", "ana.perez@x.cl", None))
        .await
        .unwrap();
    assert_eq!(free.email, "ana.perez@x.cl");
    assert_eq!(fx.repository.email_lookups(), 2);
}

#[tokio::test]
async fn test_update_phone_replacement() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    let kept = fx
        .service
        .update_account(id, update("Ana", "ana@x.cl", None))
        .await
        .unwrap();
    assert_eq!(kept.phones.len(), 1);
    assert_eq!(kept.phones[0].number, "5551234");

    let kept = fx
        .service
        .update_account(id, update("Ana", "ana@x.cl", Some(vec![])))
        .await
        .unwrap();
    assert_eq!(kept.phones[0].number, "5551234");

    let replaced = fx
        .service
        .update_account(id, update("Ana", "ana@x.cl", Some(vec![phone("111"), phone("222")])))
        .await
        .unwrap();
    let numbers: Vec<&str> = replaced.phones.iter().map(|p| p.number.as_str()).collect();
    assert_eq!(numbers, vec!["111", "222"]);
}

#[tokio::test]
async fn test_update_blank_name() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let before = account.clone();
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    let result = fx.service.update_account(id, update(" ", "ana@x.cl", None)).await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::NameRequired))
    ));
    assert_eq!(fx.repository.stored(id).unwrap(), before);
}

#[tokio::test]
async fn test_not_found_precedes_validation() {
    let fx = Fixture::new();
    let unknown = Uuid::new_v4();

    let update_result = fx
        .service
        .update_account(unknown, update("", "broken", None))
        .await;
    assert!(matches!(
        update_result,
        Err(DomainError::NotFound(NotFoundError::AccountNotFound))
    ));

    let change_result = fx.service.change_password(unknown, change("x", "y")).await;
    assert!(matches!(
        change_result,
        Err(DomainError::NotFound(NotFoundError::AccountNotFound))
    ));

    assert!(matches!(
        fx.service.delete_account(unknown).await,
        Err(DomainError::NotFound(NotFoundError::AccountNotFound))
    ));
    assert_eq!(fx.repository.saves(), 0);
}

// ---- change password ----

#[tokio::test]
async fn test_change_password_success() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));
    fx.clock.advance(Duration::minutes(10));

    let message = fx
        .service
        .change_password(id, change("newpass99", "newpass99"))
        .await
        .unwrap();

    assert_eq!(message.message, OperationMessage::PASSWORD_CHANGED);
    let stored = fx.repository.stored(id).unwrap();
    assert_eq!(stored.password_hash, "hashed:newpass99");
    assert_eq!(stored.modified_at, fx.clock.now());
}

#[tokio::test]
async fn test_change_password_validation_order() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    assert!(matches!(
        fx.service.change_password(id, change("bad", "other")).await,
        Err(DomainError::Validation(ValidationError::InvalidPasswordFormat))
    ));
    assert!(matches!(
        fx.service
            .change_password(id, change("newpass99", "newpass98"))
            .await,
        Err(DomainError::Validation(ValidationError::PasswordMismatch))
    ));
    assert_eq!(
        fx.repository.stored(id).unwrap().password_hash,
        "hashed:original1"
    );
}

// ---- delete ----

#[tokio::test]
async fn test_delete_account() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));

    let message = fx.service.delete_account(id).await.unwrap();
    assert_eq!(message.message, OperationMessage::ACCOUNT_DELETED);
    assert!(fx.repository.stored(id).is_none());

    assert!(matches!(
        fx.service.delete_account(id).await,
        Err(DomainError::NotFound(NotFoundError::AccountNotFound))
    ));
}

// ---- error boundary ----

#[tokio::test]
async fn test_failed_save_leaves_store_unchanged() {
    let account = stored_account("ana@x.cl");
    let id = account.id;
    let before = account.clone();
    let fx = Fixture::with_repository(MockAccountRepository::with_account(account));
    fx.repository.fail_saves(true);

    let result = fx
        .service
        .update_account(id, update("Ana Maria", "ana.maria@x.cl", Some(vec![phone("9")])))
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, DomainError::Internal { .. }));
    assert_eq!(error.to_string(), INTERNAL_ERROR_MESSAGE);
    let cause = error.source().unwrap().downcast_ref::<DomainError>().unwrap();
    assert!(matches!(cause, DomainError::Storage { .. }));

    assert_eq!(fx.repository.stored(id).unwrap(), before);
}

#[tokio::test]
async fn test_storage_read_failure_is_wrapped() {
    let fx = Fixture::new();
    fx.repository.fail_reads(true);

    let error = fx.service.list_accounts().await.unwrap_err();
    assert!(matches!(error, DomainError::Internal { .. }));
    assert!(!error.is_domain());
}

#[tokio::test]
async fn test_hasher_failure_is_wrapped() {
    let fx = Fixture::new();
    fx.hasher.fail(true);

    let error = fx.service.create_account(juan()).await.unwrap_err();

    assert!(matches!(error, DomainError::Internal { .. }));
    assert!(error.source().unwrap().to_string().contains("hasher failure injected"));
    assert_eq!(fx.repository.count(), 0);
}

#[tokio::test]
async fn test_invalid_pattern_fails_construction() {
    use std::sync::Arc;

    use crate::services::account::{AccountService, AccountServiceConfig};
    use crate::services::clock::FixedClock;
    use crate::services::token::{TokenService, TokenServiceConfig};

    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(Utc::now()));
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new(TEST_SECRET, 60), clock.clone()).unwrap(),
    );
    let config = AccountServiceConfig {
        password_pattern: r"(?=.*\d).{8,}".to_string(),
        ..AccountServiceConfig::default()
    };

    let result = AccountService::new(
        Arc::new(MockAccountRepository::new()),
        Arc::new(PrefixHasher::new()),
        tokens,
        clock,
        config,
    );
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}
