use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::dto::UpdateAccountDto;
use crate::handlers::ApiError;

/// Handler for PUT /api/users/{id}
///
/// Replaces name and email. Phones are replaced only when the body carries a
/// non-empty `phones` list.
pub async fn update_account<R, H>(
    state: web::Data<AppState<R, H>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAccountDto>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();
    let dto = body.into_inner();
    if let Err(errors) = dto.validate() {
        log::warn!("Validation failed for update_account {}: {}", id, errors);
        return Err(errors.into());
    }

    let updated = state.account_service.update_account(id, dto.into()).await?;
    Ok(HttpResponse::Ok().json(updated))
}
