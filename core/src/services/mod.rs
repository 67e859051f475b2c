//! Business services containing domain logic and use cases.

pub mod account;
pub mod clock;
pub mod password_hasher;
pub mod token;
pub mod validation;

// Re-export commonly used types
pub use account::{AccountFactory, AccountService, AccountServiceConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use password_hasher::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use validation::{
    ChangePasswordValidator, CreateValidator, FormatRule, FormatValidator, UniquenessValidator,
    UpdateValidator, Validator,
};
