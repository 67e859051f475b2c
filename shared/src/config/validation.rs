//! Field patterns used by the account validators

use serde::{Deserialize, Serialize};

/// Default email pattern: local part, `@`, dotted domain ending in a 2+ letter label
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Default password pattern: at least 8 ASCII letters or digits
pub const DEFAULT_PASSWORD_PATTERN: &str = r"^[a-zA-Z0-9]{8,}$";

/// Regular expressions that emails and passwords must fully match
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default = "default_email_pattern")]
    pub email_pattern: String,

    #[serde(default = "default_password_pattern")]
    pub password_pattern: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            email_pattern: default_email_pattern(),
            password_pattern: default_password_pattern(),
        }
    }
}

impl ValidationConfig {
    /// Read `VALIDATION_EMAIL_REGEX` and `VALIDATION_PASSWORD_REGEX`, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            email_pattern: std::env::var("VALIDATION_EMAIL_REGEX")
                .unwrap_or_else(|_| default_email_pattern()),
            password_pattern: std::env::var("VALIDATION_PASSWORD_REGEX")
                .unwrap_or_else(|_| default_password_pattern()),
        }
    }
}

fn default_email_pattern() -> String {
    String::from(DEFAULT_EMAIL_PATTERN)
}

fn default_password_pattern() -> String {
    String::from(DEFAULT_PASSWORD_PATTERN)
}
