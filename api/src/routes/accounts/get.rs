use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::handlers::ApiError;

/// Handler for GET /api/users/{id}
pub async fn get_account<R, H>(
    state: web::Data<AppState<R, H>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let account = state.account_service.get_account(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(account))
}
