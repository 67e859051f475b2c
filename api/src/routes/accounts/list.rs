use actix_web::{web, HttpResponse};

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::handlers::ApiError;

/// Handler for GET /api/users
pub async fn list_accounts<R, H>(state: web::Data<AppState<R, H>>) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let accounts = state.account_service.list_accounts().await?;
    Ok(HttpResponse::Ok().json(accounts))
}
