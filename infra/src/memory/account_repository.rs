//! Process-local account store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ua_core::domain::entities::Account;
use ua_core::errors::{ConflictError, DomainError};
use ua_core::repositories::AccountRepository;

/// Account repository backed by a map keyed by account id
///
/// Email uniqueness is enforced under the write lock, so two concurrent
/// creations with the same email cannot both be stored.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.has_email(email)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by_key(|a| (a.created_at, a.id));
        Ok(all)
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let taken = accounts
            .values()
            .any(|other| other.id != account.id && other.has_email(&account.email));
        if taken {
            return Err(ConflictError::EmailAlreadyExists.into());
        }

        accounts.insert(account.id, account.clone());
        tracing::debug!(account_id = %account.id, "Account stored in memory");
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> Result<(), DomainError> {
        self.accounts.write().await.remove(&account.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ua_core::domain::entities::Phone;

    fn account(email: &str, minutes: i64) -> Account {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        Account::new(
            "Juan Rodriguez".to_string(),
            email.to_string(),
            "hash".to_string(),
            Some("token".to_string()),
            vec![Phone::new("1234567", "1", "57")],
            now,
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(account("juan@x.cl", 0)).await.unwrap();

        let by_id = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "juan@x.cl");
        assert_eq!(by_id.phones.len(), 1);

        let by_email = repo.find_by_email("juan@x.cl").await.unwrap().unwrap();
        assert_eq!(by_email.id, saved.id);

        assert!(repo.find_by_email("other@x.cl").await.unwrap().is_none());
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_rejects_email_of_other_account() {
        let repo = InMemoryAccountRepository::new();
        repo.save(account("juan@x.cl", 0)).await.unwrap();

        let result = repo.save(account("juan@x.cl", 1)).await;
        assert!(matches!(
            result,
            Err(DomainError::Conflict(ConflictError::EmailAlreadyExists))
        ));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_account() {
        let repo = InMemoryAccountRepository::new();
        let mut saved = repo.save(account("juan@x.cl", 0)).await.unwrap();

        saved.name = "Juan R".to_string();
        repo.save(saved.clone()).await.unwrap();

        let stored = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Juan R");
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_creation() {
        let repo = InMemoryAccountRepository::new();
        let later = repo.save(account("b@x.cl", 5)).await.unwrap();
        let earlier = repo.save(account("a@x.cl", 0)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![earlier.id, later.id]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAccountRepository::new();
        let saved = repo.save(account("juan@x.cl", 0)).await.unwrap();

        repo.delete(&saved).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
        assert_eq!(repo.count().await, 0);
    }
}
