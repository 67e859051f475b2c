//! Email uniqueness check against the account repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{ConflictError, DomainResult};
use crate::repositories::AccountRepository;

use super::Validator;

/// Rejects an email that is already bound to an account
///
/// Advisory only: a concurrent write can still slip in between this lookup
/// and the save, which the repository's own uniqueness constraint catches.
pub struct UniquenessValidator<R: AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository> UniquenessValidator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: AccountRepository> Clone for UniquenessValidator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: AccountRepository> Validator<str> for UniquenessValidator<R> {
    async fn validate(&self, email: &str) -> DomainResult<()> {
        match self.repository.find_by_email(email).await? {
            Some(_) => Err(ConflictError::EmailAlreadyExists.into()),
            None => Ok(()),
        }
    }
}
