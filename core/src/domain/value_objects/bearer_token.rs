//! Signed bearer credential issued to an account.

use chrono::{DateTime, Utc};

/// A freshly issued token together with the claims it was signed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken {
    /// Compact JWS string handed to the client
    pub raw: String,
    /// Email the token is bound to
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl BearerToken {
    /// Consumes the token, keeping only the compact string
    pub fn into_raw(self) -> String {
        self.raw
    }
}
