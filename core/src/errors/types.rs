//! Error kinds a caller can act on
//!
//! Each variant's `Display` text is the user-facing message; the transport
//! layer forwards it unchanged.

use thiserror::Error;

/// Input rejected by the validation pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password does not meet the required format")]
    InvalidPasswordFormat,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Name is required")]
    NameRequired,
}

/// State conflicts with an existing account
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Email is already registered")]
    EmailAlreadyExists,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Account not found")]
    AccountNotFound,
}

/// Bearer token failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token")]
    Invalid,

    #[error("Token subject must not be blank")]
    InvalidSubject,

    #[error("Signing key too short: {actual} bytes, at least {min_bytes} required")]
    WeakSigningKey { min_bytes: usize, actual: usize },

    #[error("Token generation failed")]
    GenerationFailed,
}
