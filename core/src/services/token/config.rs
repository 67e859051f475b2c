//! Configuration for the token service

use ua_shared::config::JwtConfig;

/// Smallest HS512 key accepted, in bytes (512 bits)
pub const MIN_SECRET_BYTES: usize = 64;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HS512 signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_seconds: i64,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), config.expiration_seconds)
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
