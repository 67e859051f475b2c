//! Mapping from core and request errors to HTTP responses

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use std::collections::HashMap;
use validator::ValidationErrors;

use ua_core::errors::{
    ConflictError, DomainError, NotFoundError, TokenError, ValidationError, INTERNAL_ERROR_MESSAGE,
};
use ua_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

use crate::dto::ErrorResponseExt;

/// Error returned by every account handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed field validation
    #[error("Invalid request data")]
    InvalidRequest(#[from] ValidationErrors),

    /// Malformed body or path
    #[error("{0}")]
    BadRequest(String),
}

impl IntoErrorResponse for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(error) => domain_error_body(error),
            ApiError::InvalidRequest(errors) => {
                ErrorResponse::with_details(
                    error_codes::VALIDATION_ERROR,
                    "Invalid request data",
                    field_details(errors),
                )
            }
            ApiError::BadRequest(message) => ErrorResponse::new(error_codes::BAD_REQUEST, message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::InvalidRequest(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        }
        self.to_error_response().to_response(status)
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Token(TokenError::WeakSigningKey { .. } | TokenError::GenerationFailed) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Storage { .. }
        | DomainError::Hashing { .. }
        | DomainError::Configuration { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_error_body(error: &DomainError) -> ErrorResponse {
    let code = match error {
        DomainError::Validation(ValidationError::InvalidEmailFormat) => error_codes::INVALID_EMAIL,
        DomainError::Validation(ValidationError::InvalidPasswordFormat) => {
            error_codes::INVALID_PASSWORD
        }
        DomainError::Validation(ValidationError::PasswordMismatch) => {
            error_codes::PASSWORD_MISMATCH
        }
        DomainError::Validation(ValidationError::NameRequired) => error_codes::NAME_REQUIRED,
        DomainError::Conflict(ConflictError::EmailAlreadyExists) => {
            error_codes::EMAIL_ALREADY_EXISTS
        }
        DomainError::NotFound(NotFoundError::AccountNotFound) => error_codes::ACCOUNT_NOT_FOUND,
        DomainError::Token(TokenError::Expired) => error_codes::TOKEN_EXPIRED,
        DomainError::Token(
            TokenError::Malformed | TokenError::Invalid | TokenError::InvalidSubject,
        ) => error_codes::TOKEN_INVALID,
        _ => error_codes::INTERNAL_ERROR,
    };

    if domain_status(error).is_server_error() {
        // Never leak collaborator messages
        return ErrorResponse::new(code, INTERNAL_ERROR_MESSAGE);
    }
    ErrorResponse::new(code, error.to_string())
}

fn field_details(errors: &ValidationErrors) -> HashMap<String, serde_json::Value> {
    errors
        .errors()
        .iter()
        .map(|(field, kind)| (field.to_string(), serde_json::to_value(kind).unwrap_or_default()))
        .collect()
}

/// Turns JSON extractor failures into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// Turns path extractor failures (e.g. a malformed account id) into a 400
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request path: {}", err);
    ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}
