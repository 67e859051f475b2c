use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::handlers::ApiError;

/// Handler for DELETE /api/users/{id}
pub async fn delete_account<R, H>(
    state: web::Data<AppState<R, H>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();
    let message = state.account_service.delete_account(id).await?;
    log::info!("Account {} deleted", id);
    Ok(HttpResponse::Ok().json(message))
}
