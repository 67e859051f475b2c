//! Account route handlers
//!
//! - `POST   /api/users`               create
//! - `GET    /api/users`               list
//! - `GET    /api/users/{id}`          get
//! - `PUT    /api/users/{id}`          update
//! - `PUT    /api/users/{id}/password` change password
//! - `DELETE /api/users/{id}`          delete

pub mod change_password;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use actix_web::web;
use ua_core::repositories::AccountRepository;
use ua_core::services::{AccountService, PasswordHasher};

pub use change_password::change_password;
pub use create::create_account;
pub use delete::delete_account;
pub use get::get_account;
pub use list::list_accounts;
pub use update::update_account;

/// Application state that holds shared services
pub struct AppState<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    pub account_service: Arc<AccountService<R, H>>,
}

impl<R, H> AppState<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    pub fn new(account_service: Arc<AccountService<R, H>>) -> Self {
        Self { account_service }
    }
}

/// Registers the account routes under `/api/users`
pub fn configure<R, H>(cfg: &mut web::ServiceConfig)
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    cfg.service(
        web::scope("/api/users")
            .route("", web::post().to(create_account::<R, H>))
            .route("", web::get().to(list_accounts::<R, H>))
            .route("/{id}", web::get().to(get_account::<R, H>))
            .route("/{id}", web::put().to(update_account::<R, H>))
            .route("/{id}", web::delete().to(delete_account::<R, H>))
            .route("/{id}/password", web::put().to(change_password::<R, H>)),
    );
}
