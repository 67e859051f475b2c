pub mod account;
pub mod error;

pub use account::{ChangePasswordDto, CreateAccountDto, PhoneDto, UpdateAccountDto};
pub use error::{ErrorResponse, ErrorResponseExt};
