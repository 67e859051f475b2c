//! JSON error body shared by every endpoint

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ "error", "message", "details"?, "timestamp" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code from [`error_codes`]
    pub error: String,
    pub message: String,
    /// Per-field problems; omitted from the body when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        ErrorResponse {
            details: Some(details),
            ..Self::new(error, message)
        }
    }
}

pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    pub const INVALID_PASSWORD: &str = "INVALID_PASSWORD";
    pub const PASSWORD_MISMATCH: &str = "PASSWORD_MISMATCH";
    pub const NAME_REQUIRED: &str = "NAME_REQUIRED";
    pub const EMAIL_ALREADY_EXISTS: &str = "EMAIL_ALREADY_EXISTS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ACCOUNT_NOT_FOUND: &str = "ACCOUNT_NOT_FOUND";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Errors that know how to describe themselves as an [`ErrorResponse`]
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}
