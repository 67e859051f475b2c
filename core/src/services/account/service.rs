//! Account lifecycle orchestrator

use std::error::Error;
use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Account;
use crate::domain::value_objects::{
    AccountCreated, AccountDetail, AccountSummary, AccountUpdated, ChangePasswordRequest,
    CreateAccountRequest, OperationMessage, UpdateAccountRequest,
};
use crate::errors::{DomainError, DomainResult, NotFoundError};
use crate::repositories::AccountRepository;
use crate::services::clock::Clock;
use crate::services::password_hasher::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::validation::{
    ChangePasswordValidator, CreateValidator, FormatValidator, UniquenessValidator,
    UpdateValidator, Validator,
};

use super::config::AccountServiceConfig;
use super::factory::AccountFactory;

/// Sequences validation, persistence and token issuance for each account operation
///
/// Every operation works on an owned copy of the account and writes to the
/// repository once, at the end. Declared domain errors reach the caller as
/// they are; any other failure is logged and replaced by
/// `DomainError::Internal`, which keeps the original as its source.
pub struct AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Account persistence
    repository: Arc<R>,
    /// Password hashing for password changes
    hasher: Arc<H>,
    /// Bearer token issuance
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
    factory: AccountFactory<H>,
    create_validator: CreateValidator<R>,
    update_validator: UpdateValidator,
    change_password_validator: ChangePasswordValidator,
    /// Used on update, only when the email changes
    uniqueness: UniquenessValidator<R>,
}

impl<R, H> AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Create a new account service
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` when either pattern does not compile.
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        token_service: Arc<TokenService>,
        clock: Arc<dyn Clock>,
        config: AccountServiceConfig,
    ) -> DomainResult<Self> {
        let email = FormatValidator::email(&config.email_pattern)?;
        let password = FormatValidator::password(&config.password_pattern)?;
        let uniqueness = UniquenessValidator::new(Arc::clone(&repository));

        Ok(Self {
            factory: AccountFactory::new(Arc::clone(&hasher), Arc::clone(&clock)),
            create_validator: CreateValidator::new(
                email.clone(),
                password.clone(),
                uniqueness.clone(),
            ),
            update_validator: UpdateValidator::new(email),
            change_password_validator: ChangePasswordValidator::new(password),
            uniqueness,
            repository,
            hasher,
            token_service,
            clock,
        })
    }

    /// Register a new account
    ///
    /// Validates email format, password format and email uniqueness in that
    /// order, issues a bearer token for the email and persists the account
    /// with the token attached.
    pub async fn create_account(&self, request: CreateAccountRequest) -> DomainResult<AccountCreated> {
        unit_of_work("create_account", async {
            self.create_validator.validate(&request).await?;

            let token = self.token_service.issue(&request.email)?;
            let account = self.factory.build(&request, token)?;
            let stored = self.repository.save(account).await?;

            tracing::info!(
                account_id = %stored.id,
                email = %stored.email,
                event = "account_created",
                "Account created"
            );
            Ok(AccountCreated::from(&stored))
        })
        .await
    }

    pub async fn get_account(&self, id: Uuid) -> DomainResult<AccountDetail> {
        unit_of_work("get_account", async {
            let account = self.resolve(id).await?;
            Ok(AccountDetail::from(&account))
        })
        .await
    }

    /// All accounts, in repository order
    pub async fn list_accounts(&self) -> DomainResult<Vec<AccountSummary>> {
        unit_of_work("list_accounts", async {
            let accounts = self.repository.find_all().await?;
            Ok(accounts.iter().map(AccountSummary::from).collect())
        })
        .await
    }

    /// Update name, email and optionally phones
    ///
    /// Email uniqueness is only checked when the email actually changes.
    /// Phones are replaced only when the request carries a non-empty list.
    pub async fn update_account(
        &self,
        id: Uuid,
        request: UpdateAccountRequest,
    ) -> DomainResult<AccountUpdated> {
        unit_of_work("update_account", async {
            let mut account = self.resolve(id).await?;
            self.update_validator.validate(&request).await?;

            if !account.has_email(&request.email) {
                self.uniqueness.validate(request.email.as_str()).await?;
            }

            let phones = request.replacement_phones();
            account.update_profile(request.name, request.email, self.clock.now());
            if let Some(phones) = phones {
                account.replace_phones(phones);
            }

            let stored = self.repository.save(account).await?;

            tracing::info!(
                account_id = %stored.id,
                event = "account_updated",
                "Account profile updated"
            );
            Ok(AccountUpdated::from(&stored))
        })
        .await
    }

    pub async fn change_password(
        &self,
        id: Uuid,
        request: ChangePasswordRequest,
    ) -> DomainResult<OperationMessage> {
        unit_of_work("change_password", async {
            let mut account = self.resolve(id).await?;
            self.change_password_validator.validate(&request).await?;

            let password_hash = self.hasher.hash(&request.password)?;
            account.change_password_hash(password_hash, self.clock.now());
            let stored = self.repository.save(account).await?;

            tracing::info!(
                account_id = %stored.id,
                event = "password_changed",
                "Account password changed"
            );
            Ok(OperationMessage::new(OperationMessage::PASSWORD_CHANGED))
        })
        .await
    }

    pub async fn delete_account(&self, id: Uuid) -> DomainResult<OperationMessage> {
        unit_of_work("delete_account", async {
            let account = self.resolve(id).await?;
            self.repository.delete(&account).await?;

            tracing::info!(
                account_id = %account.id,
                event = "account_deleted",
                "Account deleted"
            );
            Ok(OperationMessage::new(OperationMessage::ACCOUNT_DELETED))
        })
        .await
    }

    async fn resolve(&self, id: Uuid) -> DomainResult<Account> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::AccountNotFound.into())
    }
}

/// Runs one operation and applies the error boundary to its outcome
async fn unit_of_work<T, F>(operation: &'static str, work: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    work.await.map_err(|error| at_boundary(operation, error))
}

fn at_boundary(operation: &'static str, error: DomainError) -> DomainError {
    if error.is_domain() {
        tracing::warn!(
            operation,
            error = %error,
            event = "request_rejected",
            "Account operation rejected"
        );
        return error;
    }
    if matches!(error, DomainError::Internal { .. }) {
        return error;
    }

    tracing::error!(
        operation,
        error = %cause_chain(&error),
        event = "internal_failure",
        "Account operation failed unexpectedly"
    );
    DomainError::internal(error)
}

fn cause_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
