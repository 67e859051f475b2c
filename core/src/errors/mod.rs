//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ConflictError, NotFoundError, TokenError, ValidationError};

use thiserror::Error;

/// Message carried by [`DomainError::Internal`]; the cause stays in `source()`
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred while processing the request";

/// Core domain errors
///
/// The first four variants are declared domain errors and reach the caller
/// unchanged. `Storage`, `Hashing` and `Configuration` come from collaborators
/// and are rewrapped as `Internal` at the account service boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Storage failure: {message}")]
    Storage { message: String },

    #[error("Password hashing failure: {message}")]
    Hashing { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DomainError {
    /// True for errors the caller can act on
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_)
                | DomainError::Conflict(_)
                | DomainError::NotFound(_)
                | DomainError::Token(_)
        )
    }

    /// Wrap an unexpected failure behind the generic internal message
    pub fn internal(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        DomainError::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            source: Box::new(cause),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        DomainError::Hashing {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        DomainError::Configuration {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
