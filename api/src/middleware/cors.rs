//! CORS middleware configuration for cross-origin requests.
//!
//! Built from [`CorsConfig`]: a `*` entry in any list opens that dimension,
//! otherwise only the listed origins, methods and headers are accepted.

use actix_cors::Cors;
use actix_web::http::Method;
use ua_shared::config::CorsConfig;

const WILDCARD: &str = "*";

/// Creates a CORS middleware instance from configuration.
///
/// A disabled configuration yields actix-cors' default, which rejects every
/// cross-origin request.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        log::info!("CORS disabled, cross-origin requests will be rejected");
        return Cors::default();
    }

    let mut cors = Cors::default().max_age(config.max_age as usize);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allowed_methods.iter().any(|m| m == WILDCARD) {
        cors = cors.allow_any_method();
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| match m.parse::<Method>() {
                Ok(method) => Some(method),
                Err(_) => {
                    log::warn!("Ignoring unknown CORS method: {}", m);
                    None
                }
            })
            .collect();
        cors = cors.allowed_methods(methods);
    }

    if config.allowed_headers.iter().any(|h| h == WILDCARD) {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(config.allowed_headers.iter().map(String::as_str));
    }

    // actix-cors refuses credentials together with a wildcard origin
    if config.allow_credentials && !config.allows_any_origin() {
        cors = cors.supports_credentials();
    }

    cors
}
