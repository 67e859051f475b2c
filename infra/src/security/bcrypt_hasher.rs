//! bcrypt implementation of the PasswordHasher interface

use ua_core::errors::{DomainError, DomainResult};
use ua_core::services::PasswordHasher;

/// Password hasher using bcrypt with a configurable cost factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, raw: &str) -> DomainResult<String> {
        bcrypt::hash(raw, self.cost)
            .map_err(|e| DomainError::hashing(format!("Failed to hash password: {}", e)))
    }

    fn matches(&self, raw: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(raw, hash)
            .map_err(|e| DomainError::hashing(format!("Failed to verify password: {}", e)))
    }
}
