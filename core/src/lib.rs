//! # User Accounts Core
//!
//! Core business logic and domain layer for the user account service.
//! This crate contains the account entity, the validation pipeline, the
//! bearer token service, the account factory and the lifecycle orchestrator,
//! along with the repository and hashing interfaces the infrastructure layer
//! implements.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Phone};
pub use domain::value_objects::*;
pub use errors::*;
pub use repositories::AccountRepository;
pub use services::{
    AccountFactory, AccountService, AccountServiceConfig, Clock, FixedClock, PasswordHasher,
    SystemClock, TokenService, TokenServiceConfig,
};
