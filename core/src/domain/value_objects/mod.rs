//! Value objects representing immutable domain concepts.

pub mod bearer_token;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use bearer_token::BearerToken;
pub use requests::{ChangePasswordRequest, CreateAccountRequest, PhoneInput, UpdateAccountRequest};
pub use responses::{
    AccountCreated, AccountDetail, AccountSummary, AccountUpdated, OperationMessage, PhoneView,
};
