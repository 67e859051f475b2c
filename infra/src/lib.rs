//! Adapters behind the `ua_core` account ports
//!
//! `database` holds the SQLx-backed MySQL store and is gated behind the
//! default `mysql` feature. `memory` is the process-local store used for
//! development and tests. `security` hashes passwords with bcrypt.

#[cfg(feature = "mysql")]
use ua_core::errors::DomainError;

#[cfg(feature = "mysql")]
pub mod database;

pub mod memory;

pub mod security;

pub use memory::InMemoryAccountRepository;
pub use security::BcryptPasswordHasher;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlAccountRepository};

/// Failures raised while setting up or talking to MySQL
#[cfg(feature = "mysql")]
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(String),

    /// Unusable settings, e.g. a malformed URL
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "mysql")]
impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Config(message) => DomainError::configuration(message),
            other => DomainError::storage(other.to_string()),
        }
    }
}
