//! Layered runtime configuration
//!
//! Precedence, lowest first: the preset for the detected environment with the
//! plain environment variables applied (`AppConfig::from_env`), then the
//! optional `config/{environment}.toml` file, then `UA__`-prefixed variables
//! such as `UA__SERVER__PORT=9090` or `UA__AUTH__JWT__SECRET=...`.

use config::{ConfigError, File};
use ua_shared::config::{AppConfig, Environment, StorageBackend};

const ENV_PREFIX: &str = "UA";
const ENV_SEPARATOR: &str = "__";

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from every layer
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::from_env().map_err(|e| ConfigError::Message(e.to_string()))?;
        let file = defaults.environment.config_file();
        Self::build(defaults, &file)
    }

    fn build(defaults: AppConfig, file: &str) -> Result<Self, ConfigError> {
        let app = config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?)
            .add_source(File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<AppConfig>()?;

        Ok(Self { app })
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn is_development(&self) -> bool {
        self.app.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.app.database.backend
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }
}
