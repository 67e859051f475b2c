//! Account lifecycle module
//!
//! This module provides:
//! - The account factory used at registration
//! - The lifecycle orchestrator (create, get, list, update, change password, delete)

mod config;
mod factory;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use factory::AccountFactory;
pub use service::AccountService;
