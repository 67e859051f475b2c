//! Configuration for the account service

use ua_shared::config::validation::{DEFAULT_EMAIL_PATTERN, DEFAULT_PASSWORD_PATTERN};
use ua_shared::config::ValidationConfig;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Pattern an email must fully match
    pub email_pattern: String,
    /// Pattern a password must fully match
    pub password_pattern: String,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            password_pattern: DEFAULT_PASSWORD_PATTERN.to_string(),
        }
    }
}

impl From<&ValidationConfig> for AccountServiceConfig {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            email_pattern: config.email_pattern.clone(),
            password_pattern: config.password_pattern.clone(),
        }
    }
}
