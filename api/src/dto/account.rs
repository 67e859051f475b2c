//! Request bodies accepted by the account endpoints.
//!
//! Missing string fields deserialize to empty strings so that they are
//! reported as field errors instead of JSON parse failures.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use ua_core::{ChangePasswordRequest, CreateAccountRequest, PhoneInput, UpdateAccountRequest};
use ua_shared::validation::validators;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if validators::not_blank(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank").with_message("must not be blank".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhoneDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub number: String,

    #[serde(rename = "citycode", default)]
    #[validate(custom(function = "not_blank"))]
    pub city_code: String,

    #[serde(rename = "countrycode", default)]
    #[validate(custom(function = "not_blank"))]
    pub country_code: String,
}

impl From<PhoneDto> for PhoneInput {
    fn from(dto: PhoneDto) -> Self {
        Self {
            number: dto.number,
            city_code: dto.city_code,
            country_code: dto.country_code,
        }
    }
}

/// POST /api/users
#[derive(Clone, Deserialize, Validate)]
pub struct CreateAccountDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "at least one phone is required"), nested)]
    pub phones: Vec<PhoneDto>,
}

impl std::fmt::Debug for CreateAccountDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phones", &self.phones)
            .finish()
    }
}

impl From<CreateAccountDto> for CreateAccountRequest {
    fn from(dto: CreateAccountDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phones: dto.phones.into_iter().map(PhoneInput::from).collect(),
        }
    }
}

/// PUT /api/users/{id}
///
/// An absent or empty `phones` list keeps the stored phones.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAccountDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,

    #[serde(default)]
    #[validate(nested)]
    pub phones: Option<Vec<PhoneDto>>,
}

impl From<UpdateAccountDto> for UpdateAccountRequest {
    fn from(dto: UpdateAccountDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phones: dto
                .phones
                .map(|phones| phones.into_iter().map(PhoneInput::from).collect()),
        }
    }
}

/// PUT /api/users/{id}/password
#[derive(Clone, Deserialize, Validate)]
pub struct ChangePasswordDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(rename = "confirmPassword", default)]
    #[validate(custom(function = "not_blank"))]
    pub confirm_password: String,
}

impl std::fmt::Debug for ChangePasswordDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChangePasswordDto { .. }")
    }
}

impl From<ChangePasswordDto> for ChangePasswordRequest {
    fn from(dto: ChangePasswordDto) -> Self {
        Self {
            password: dto.password,
            confirm_password: dto.confirm_password,
        }
    }
}
