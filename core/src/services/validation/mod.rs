//! Validation pipeline for account operations
//!
//! Leaf validators check a single field (format) or a single repository fact
//! (uniqueness). Composite validators sequence them per operation and stop at
//! the first failure.

mod composite;
mod format;
mod uniqueness;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::errors::DomainResult;

pub use composite::{ChangePasswordValidator, CreateValidator, UpdateValidator};
pub use format::{FormatRule, FormatValidator};
pub use uniqueness::UniquenessValidator;

/// Checks an input, yielding the first violated rule as an error
#[async_trait]
pub trait Validator<Input: ?Sized + Sync>: Send + Sync {
    async fn validate(&self, input: &Input) -> DomainResult<()>;
}
