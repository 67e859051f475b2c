//! Access token settings

use serde::{Deserialize, Serialize};

use super::env::{parsed_var, InvalidEnvVar};

/// Fallback key for local runs; 64+ bytes so HS512 accepts it.
const DEV_SIGNING_SECRET: &str =
    "development-only-signing-secret-replace-me-before-any-deployment-0123456789abcdef";

const DAY_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC key; token issuance refuses keys shorter than 64 bytes
    pub secret: String,

    /// Lifetime of issued tokens in seconds
    #[serde(default = "one_day")]
    pub expiration_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            secret: DEV_SIGNING_SECRET.to_owned(),
            expiration_seconds: DAY_SECS,
        }
    }
}

impl JwtConfig {
    /// True while the built-in development key is in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEV_SIGNING_SECRET
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// `JWT_SECRET` and `JWT_EXPIRATION_SECONDS` over the defaults
    pub fn from_env() -> Result<Self, InvalidEnvVar> {
        let mut jwt = JwtConfig::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            jwt.secret = secret;
        }
        if let Some(seconds) = parsed_var("JWT_EXPIRATION_SECONDS")? {
            jwt.expiration_seconds = seconds;
        }
        Ok(AuthConfig { jwt })
    }
}

fn one_day() -> i64 {
    DAY_SECS
}
