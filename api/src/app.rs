//! Application factory
//!
//! Assembles middleware, extractor configuration and routes around the shared
//! application state. Used by the binary and by the HTTP tests.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;
use ua_shared::config::{CorsConfig, ServerConfig};
use ua_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::{json_error_handler, path_error_handler};
use crate::middleware::create_cors;
use crate::routes::accounts::{self, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<R, H>(
    app_state: web::Data<AppState<R, H>>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .configure(accounts::configure::<R, H>)
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "user-accounts-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
