//! Runtime settings, one sub-module per concern
//!
//! - `auth`: token signing and lifetime
//! - `database`: storage backend and MySQL pool
//! - `environment`: deployment environment and log output
//! - `server`: HTTP listener and CORS
//! - `validation`: field patterns for account checks

pub mod auth;
pub mod database;
mod env;
pub mod environment;
pub mod server;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use env::InvalidEnvVar;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use validation::ValidationConfig;

/// Every settings section; each one may be omitted when deserializing
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub validation: ValidationConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loopback listener, in-memory accounts, open CORS
    pub fn development() -> Self {
        AppConfig {
            server: ServerConfig::new("127.0.0.1", 8080),
            database: DatabaseConfig::in_memory(),
            cors: CorsConfig::development(),
            ..Self::for_environment(Environment::Development)
        }
    }

    /// MySQL storage with a larger pool; CORS origins must be configured
    pub fn production() -> Self {
        AppConfig {
            database: DatabaseConfig::new("mysql://prod-db:3306/user_accounts")
                .with_max_connections(50),
            ..Self::for_environment(Environment::Production)
        }
    }

    fn for_environment(environment: Environment) -> Self {
        AppConfig {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Self::default()
        }
    }

    /// Preset for the detected environment with the plain environment
    /// variables of each section applied on top
    ///
    /// Fails on the first variable that is set but does not parse.
    pub fn from_env() -> Result<Self, InvalidEnvVar> {
        let environment = Environment::from_env()?;
        let preset = if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        };

        Ok(AppConfig {
            environment,
            logging: LoggingConfig::for_environment(environment),
            server: ServerConfig::from_env_or(preset.server)?,
            database: DatabaseConfig::from_env_or(preset.database)?,
            auth: AuthConfig::from_env()?,
            validation: ValidationConfig::from_env(),
            cors: preset.cors,
        })
    }
}
