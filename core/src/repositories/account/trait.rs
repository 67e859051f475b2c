//! Account repository trait defining the interface for account persistence.
//!
//! Implementations live in the infrastructure layer. Every failure of the
//! underlying store is reported as `DomainError::Storage`, except a violated
//! email uniqueness constraint, which is reported as
//! `ConflictError::EmailAlreadyExists`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// All stored accounts, in no particular order
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Insert or replace an account, phones included, atomically
    ///
    /// # Returns
    /// * `Ok(Account)` - The account as stored
    /// * `Err(DomainError::Conflict)` - Email already bound to another account
    /// * `Err(DomainError)` - Storage failure; nothing was written
    async fn save(&self, account: Account) -> Result<Account, DomainError>;

    /// Remove an account and its phones
    async fn delete(&self, account: &Account) -> Result<(), DomainError>;
}
