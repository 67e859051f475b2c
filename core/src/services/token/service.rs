//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BearerToken;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::services::clock::Clock;

use super::config::{TokenServiceConfig, MIN_SECRET_BYTES};

/// Claims signed into every bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}

/// Issues and verifies HS512 bearer tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Errors
    ///
    /// `TokenError::WeakSigningKey` when the secret is blank or shorter than
    /// [`MIN_SECRET_BYTES`]. `DomainError::Configuration` when the lifetime is
    /// not positive or pushes expiry past the representable date range.
    pub fn new(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let actual = if config.secret.trim().is_empty() {
            0
        } else {
            config.secret.len()
        };
        if actual < MIN_SECRET_BYTES {
            return Err(TokenError::WeakSigningKey {
                min_bytes: MIN_SECRET_BYTES,
                actual,
            }
            .into());
        }

        let ttl = Duration::try_seconds(config.ttl_seconds)
            .filter(|ttl| *ttl > Duration::zero())
            .filter(|ttl| clock.now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "Token lifetime must be a positive number of seconds within the date range, got {}",
                    config.ttl_seconds
                ))
            })?;

        // Expiry is checked against the injected clock, not the system time
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl,
            clock,
        })
    }

    /// Issues a token bound to `subject`, valid from now for the configured lifetime
    pub fn issue(&self, subject: &str) -> DomainResult<BearerToken> {
        if subject.trim().is_empty() {
            return Err(TokenError::InvalidSubject.into());
        }

        let issued_at = self.clock.now();
        let expires_at = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            tracing::error!(issued_at = %issued_at, "Token expiry out of date range");
            TokenError::GenerationFailed
        })?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let raw = encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign bearer token");
                TokenError::GenerationFailed
            },
        )?;

        Ok(BearerToken {
            raw,
            subject: claims.sub,
            issued_at,
            expires_at,
        })
    }

    /// True only for a well-formed, correctly signed, unexpired token
    pub fn validate(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }
        match self.verify(token) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(reason = %reason, "Bearer token rejected");
                false
            }
        }
    }

    /// Returns the subject of a valid token
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - Signature fine, `exp` reached
    /// * `TokenError::Malformed` - Not a decodable JWT
    /// * `TokenError::Invalid` - Any other verification failure
    pub fn extract_subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.verify(token)?.sub)
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidToken
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_)
                | ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
                _ => TokenError::Invalid,
            }
        })?;

        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}
