//! Deployment environment and the log settings derived from it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::env::{parsed_var, InvalidEnvVar};

/// Where the service is running
///
/// Selects the configuration preset, the optional `config/<name>.toml`
/// overlay and the default log settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Read `ENVIRONMENT`, falling back to `ENV`; development when neither is set
    pub fn from_env() -> Result<Self, InvalidEnvVar> {
        for key in ["ENVIRONMENT", "ENV"] {
            if let Some(env) = parsed_var(key)? {
                return Ok(env);
            }
        }
        Ok(Environment::default())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Settings file stem for this environment, relative to the working dir
    pub fn config_file(&self) -> String {
        format!("config/{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let env = match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" | "stage" | "test" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            other => return Err(format!("unknown environment '{}'", other)),
        };
        Ok(env)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter, e.g. `info` or `ua_core=debug,info`; `RUST_LOG` wins
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "with_timestamp")]
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".into(),
            format: LogFormat::default(),
            timestamp: true,
        }
    }
}

impl LoggingConfig {
    /// debug/pretty locally, info/compact on staging, warn/json in production
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Compact),
            Environment::Production => ("warn", LogFormat::Json),
        };
        LoggingConfig {
            level: level.into(),
            format,
            ..Self::default()
        }
    }
}

/// Output shape of each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    #[default]
    Pretty,
    /// Pretty without target and module path
    Compact,
}

fn with_timestamp() -> bool {
    true
}
