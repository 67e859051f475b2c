use actix_web::{web, HttpResponse};
use validator::Validate;

use ua_core::repositories::AccountRepository;
use ua_core::services::PasswordHasher;

use super::AppState;
use crate::dto::CreateAccountDto;
use crate::handlers::ApiError;

/// Handler for POST /api/users
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Juan Rodriguez",
///     "email": "juan@rodriguez.org",
///     "password": "hunter123",
///     "phones": [{ "number": "1234567", "citycode": "1", "countrycode": "57" }]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `id`, `created`, `modified`, `last_login`, `token` and
/// `isactive`. 400 on invalid input, 409 when the email is taken.
pub async fn create_account<R, H>(
    state: web::Data<AppState<R, H>>,
    body: web::Json<CreateAccountDto>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let dto = body.into_inner();
    if let Err(errors) = dto.validate() {
        log::warn!("Validation failed for create_account request: {}", errors);
        return Err(errors.into());
    }

    let created = state.account_service.create_account(dto.into()).await?;
    log::info!("Account {} registered", created.id);

    Ok(HttpResponse::Created().json(created))
}
