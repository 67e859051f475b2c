//! Inputs accepted by the account lifecycle operations.

use std::fmt;

use crate::domain::entities::Phone;

/// Phone entry as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInput {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

impl From<&PhoneInput> for Phone {
    fn from(input: &PhoneInput) -> Self {
        Phone::new(&input.number, &input.city_code, &input.country_code)
    }
}

/// Registration request
#[derive(Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phones: Vec<PhoneInput>,
}

impl fmt::Debug for CreateAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAccountRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phones", &self.phones)
            .finish()
    }
}

/// Profile update request
///
/// `phones: None` and `Some(vec![])` both leave the stored phones untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAccountRequest {
    pub name: String,
    pub email: String,
    pub phones: Option<Vec<PhoneInput>>,
}

impl UpdateAccountRequest {
    /// Phones to store, if the request replaces them
    pub fn replacement_phones(&self) -> Option<Vec<Phone>> {
        match &self.phones {
            Some(phones) if !phones.is_empty() => Some(phones.iter().map(Phone::from).collect()),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}
