//! HTTP listener and CORS settings

use serde::{Deserialize, Serialize};

use super::env::{parsed_var, InvalidEnvVar};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const KEEP_ALIVE_SECS: u64 = 75;
const MAX_PAYLOAD_BYTES: usize = 256 * 1024;
const PREFLIGHT_MAX_AGE_SECS: u64 = 86_400;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// actix worker count; 0 lets actix pick one per core
    #[serde(default)]
    pub workers: usize,

    /// Seconds an idle connection stays open
    #[serde(default = "keep_alive_secs")]
    pub keep_alive: u64,

    /// Upper bound for JSON request bodies, in bytes
    #[serde(default = "max_payload_bytes")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            workers: 0,
            keep_alive: KEEP_ALIVE_SECS,
            max_payload_size: MAX_PAYLOAD_BYTES,
        }
    }

    /// Apply `SERVER_HOST` and `SERVER_PORT` over `base`
    pub fn from_env_or(base: Self) -> Result<Self, InvalidEnvVar> {
        let mut config = base;
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.host = host;
        }
        if let Some(port) = parsed_var("SERVER_PORT")? {
            config.port = port;
        }
        Ok(config)
    }

    /// `host:port` as handed to `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy applied to every route
///
/// A `"*"` entry in any of the lists means "anything".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "standard_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "standard_headers")]
    pub allowed_headers: Vec<String>,
    #[serde(default)]
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default = "preflight_max_age")]
    pub max_age: u64,
}

impl Default for CorsConfig {
    /// Enabled, but with no origin allowed until one is configured
    fn default() -> Self {
        CorsConfig {
            enabled: true,
            allowed_origins: Vec::new(),
            allowed_methods: standard_methods(),
            allowed_headers: standard_headers(),
            allow_credentials: false,
            max_age: PREFLIGHT_MAX_AGE_SECS,
        }
    }
}

impl CorsConfig {
    /// Open policy for local work
    pub fn development() -> Self {
        let any = || vec![String::from("*")];
        CorsConfig {
            allowed_origins: any(),
            allowed_methods: any(),
            allowed_headers: any(),
            max_age: 3600,
            ..Self::default()
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn keep_alive_secs() -> u64 {
    KEEP_ALIVE_SECS
}

fn max_payload_bytes() -> usize {
    MAX_PAYLOAD_BYTES
}

fn preflight_max_age() -> u64 {
    PREFLIGHT_MAX_AGE_SECS
}

fn enabled_by_default() -> bool {
    true
}

fn standard_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn standard_headers() -> Vec<String> {
    ["Content-Type", "Authorization", "Accept"]
        .into_iter()
        .map(String::from)
        .collect()
}
