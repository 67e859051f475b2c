//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::{ConflictError, DomainError};

use super::trait_::AccountRepository;

/// Mock account repository with call counters and failure injection
#[derive(Default)]
pub struct MockAccountRepository {
    accounts: Mutex<HashMap<Uuid, Account>>,
    email_lookups: AtomicUsize,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
    fail_reads: AtomicBool,
    blind_email_lookups: AtomicBool,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(account: Account) -> Self {
        let repo = Self::new();
        repo.insert(account);
        repo
    }

    /// Stores an account without touching the counters
    pub fn insert(&self, account: Account) {
        self.accounts.lock().unwrap().insert(account.id, account);
    }

    pub fn stored(&self, id: Uuid) -> Option<Account> {
        self.accounts.lock().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn email_lookups(&self) -> usize {
        self.email_lookups.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes `find_by_email` miss every account, as a concurrent writer would
    pub fn blind_email_lookups(&self, blind: bool) {
        self.blind_email_lookups.store(blind, Ordering::SeqCst);
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::storage("read failure injected"));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.check_reads()?;
        Ok(self.stored(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        if self.blind_email_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        self.check_reads()?;
        Ok(self.accounts.lock().unwrap().values().cloned().collect())
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::storage("write failure injected"));
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .values()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(ConflictError::EmailAlreadyExists.into());
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> Result<(), DomainError> {
        self.accounts.lock().unwrap().remove(&account.id);
        Ok(())
    }
}
