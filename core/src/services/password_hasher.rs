//! One-way password hashing capability.

use crate::errors::DomainResult;

/// Produces and checks password digests
///
/// Implementations report their own failures as `DomainError::Hashing`.
/// Neither the plaintext nor the digest may be logged.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    fn matches(&self, plaintext: &str, digest: &str) -> DomainResult<bool>;
}
