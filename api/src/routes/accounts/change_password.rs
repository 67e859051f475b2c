use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::dto::ChangePasswordDto;
use crate::handlers::ApiError;

/// Handler for PUT /api/users/{id}/password
///
/// Body: `{ "password": "...", "confirmPassword": "..." }`. The new password
/// must match the configured format before the confirmation is compared.
pub async fn change_password<R, H>(
    state: web::Data<AppState<R, H>>,
    path: web::Path<Uuid>,
    body: web::Json<ChangePasswordDto>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();
    let dto = body.into_inner();
    if let Err(errors) = dto.validate() {
        log::warn!("Validation failed for change_password {}: {}", id, errors);
        return Err(errors.into());
    }

    let message = state.account_service.change_password(id, dto.into()).await?;
    Ok(HttpResponse::Ok().json(message))
}
