//! Builds new accounts from validated registration requests

use std::sync::Arc;

use crate::domain::entities::{Account, Phone};
use crate::domain::value_objects::{BearerToken, CreateAccountRequest};
use crate::errors::DomainResult;
use crate::services::clock::Clock;
use crate::services::password_hasher::PasswordHasher;

pub struct AccountFactory<H: PasswordHasher> {
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<H: PasswordHasher> AccountFactory<H> {
    pub fn new(hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self { hasher, clock }
    }

    /// Hashes the password and stamps creation, modification and last login
    /// with the same instant. Phones keep the request order.
    pub fn build(&self, request: &CreateAccountRequest, token: BearerToken) -> DomainResult<Account> {
        let password_hash = self.hasher.hash(&request.password)?;
        let phones = request.phones.iter().map(Phone::from).collect();

        Ok(Account::new(
            request.name.clone(),
            request.email.clone(),
            password_hash,
            Some(token.into_raw()),
            phones,
            self.clock.now(),
        ))
    }
}
