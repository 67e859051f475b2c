//! Account storage settings

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::env::{parsed_var, InvalidEnvVar};

/// Which account store the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MySQL through a connection pool
    MySql,
    /// Process-local store, lost on restart
    #[serde(alias = "in-memory")]
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("mysql") {
            Ok(StorageBackend::MySql)
        } else if raw.eq_ignore_ascii_case("memory") || raw.eq_ignore_ascii_case("in-memory") {
            Ok(StorageBackend::Memory)
        } else {
            Err(format!("unknown storage backend '{}'", raw))
        }
    }
}

/// Backend choice plus the MySQL pool settings
///
/// Pool fields are ignored by the in-memory backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "mysql_backend")]
    pub backend: StorageBackend,
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a free connection
    pub connect_timeout: u64,
    /// Seconds before an unused connection is dropped
    pub idle_timeout: u64,
    /// Seconds before any connection is recycled
    pub max_lifetime: u64,
    /// Statements slower than this many milliseconds are logged at warn
    #[serde(default = "slow_query_millis")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            backend: StorageBackend::MySql,
            url: "mysql://localhost:3306/user_accounts".into(),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            slow_query_threshold: slow_query_millis(),
        }
    }
}

impl DatabaseConfig {
    /// MySQL at `url` with default pool sizing
    pub fn new(url: impl Into<String>) -> Self {
        DatabaseConfig {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        DatabaseConfig {
            backend: StorageBackend::Memory,
            ..Self::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Apply `STORAGE_BACKEND`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`
    /// and `DATABASE_CONNECT_TIMEOUT` over `base`
    pub fn from_env_or(base: Self) -> Result<Self, InvalidEnvVar> {
        let mut config = base;
        if let Some(backend) = parsed_var("STORAGE_BACKEND")? {
            config.backend = backend;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.url = url;
        }
        if let Some(max) = parsed_var("DATABASE_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        if let Some(timeout) = parsed_var("DATABASE_CONNECT_TIMEOUT")? {
            config.connect_timeout = timeout;
        }
        Ok(config)
    }
}

fn mysql_backend() -> StorageBackend {
    StorageBackend::MySql
}

fn slow_query_millis() -> u64 {
    1000
}
