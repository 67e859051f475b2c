//! Typed reads of plain environment variables

use std::str::FromStr;

/// A variable is set but its value does not parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment variable {key} has unusable value '{value}'")]
pub struct InvalidEnvVar {
    pub key: String,
    pub value: String,
}

/// `Ok(None)` when `key` is unset, an error when it is set to garbage
pub(crate) fn parsed_var<T: FromStr>(key: &str) -> Result<Option<T>, InvalidEnvVar> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim().parse().map(Some).map_err(|_| InvalidEnvVar {
        key: key.to_string(),
        value: raw,
    })
}
