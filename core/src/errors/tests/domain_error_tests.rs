use std::error::Error;

use crate::errors::*;

#[test]
fn test_declared_errors_are_domain() {
    assert!(DomainError::from(ValidationError::NameRequired).is_domain());
    assert!(DomainError::from(ConflictError::EmailAlreadyExists).is_domain());
    assert!(DomainError::from(NotFoundError::AccountNotFound).is_domain());
    assert!(DomainError::from(TokenError::Expired).is_domain());
}

#[test]
fn test_collaborator_errors_are_not_domain() {
    assert!(!DomainError::storage("connection reset").is_domain());
    assert!(!DomainError::hashing("bad cost").is_domain());
    assert!(!DomainError::configuration("bad pattern").is_domain());
    assert!(!DomainError::internal(DomainError::storage("x")).is_domain());
}

#[test]
fn test_domain_error_display_is_transparent() {
    let error = DomainError::from(ValidationError::InvalidEmailFormat);
    assert_eq!(error.to_string(), "Invalid email format");
}

#[test]
fn test_internal_hides_cause_but_keeps_source() {
    let error = DomainError::internal(DomainError::storage("deadlock detected"));

    assert_eq!(error.to_string(), INTERNAL_ERROR_MESSAGE);
    assert!(!error.to_string().contains("deadlock"));

    let source = error.source().expect("internal error keeps its cause");
    assert!(source.to_string().contains("deadlock detected"));
    assert!(matches!(
        source.downcast_ref::<DomainError>(),
        Some(DomainError::Storage { .. })
    ));
}

#[test]
fn test_weak_key_message() {
    let error = TokenError::WeakSigningKey {
        min_bytes: 64,
        actual: 10,
    };
    assert_eq!(
        error.to_string(),
        "Signing key too short: 10 bytes, at least 64 required"
    );
}
