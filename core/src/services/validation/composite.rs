//! Per-operation validator chains

use async_trait::async_trait;
use ua_shared::validation::validators;

use crate::domain::value_objects::{
    ChangePasswordRequest, CreateAccountRequest, UpdateAccountRequest,
};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::AccountRepository;

use super::{FormatValidator, UniquenessValidator, Validator};

/// Registration: email format, password format, then email uniqueness
pub struct CreateValidator<R: AccountRepository> {
    email: FormatValidator,
    password: FormatValidator,
    uniqueness: UniquenessValidator<R>,
}

impl<R: AccountRepository> CreateValidator<R> {
    pub fn new(
        email: FormatValidator,
        password: FormatValidator,
        uniqueness: UniquenessValidator<R>,
    ) -> Self {
        Self {
            email,
            password,
            uniqueness,
        }
    }
}

#[async_trait]
impl<R: AccountRepository> Validator<CreateAccountRequest> for CreateValidator<R> {
    async fn validate(&self, request: &CreateAccountRequest) -> DomainResult<()> {
        self.email.validate(request.email.as_str()).await?;
        self.password.validate(request.password.as_str()).await?;
        self.uniqueness.validate(request.email.as_str()).await
    }
}

/// Profile update: name present, then email format
///
/// Uniqueness depends on the stored email, so the caller checks it.
pub struct UpdateValidator {
    email: FormatValidator,
}

impl UpdateValidator {
    pub fn new(email: FormatValidator) -> Self {
        Self { email }
    }
}

#[async_trait]
impl Validator<UpdateAccountRequest> for UpdateValidator {
    async fn validate(&self, request: &UpdateAccountRequest) -> DomainResult<()> {
        if !validators::not_blank(&request.name) {
            return Err(ValidationError::NameRequired.into());
        }
        self.email.validate(request.email.as_str()).await
    }
}

/// Password change: format first, then confirmation equality
pub struct ChangePasswordValidator {
    password: FormatValidator,
}

impl ChangePasswordValidator {
    pub fn new(password: FormatValidator) -> Self {
        Self { password }
    }
}

#[async_trait]
impl Validator<ChangePasswordRequest> for ChangePasswordValidator {
    async fn validate(&self, request: &ChangePasswordRequest) -> DomainResult<()> {
        self.password.validate(request.password.as_str()).await?;
        if request.password != request.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        Ok(())
    }
}
