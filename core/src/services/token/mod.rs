//! Token service module for bearer credentials
//!
//! This module handles:
//! - HS512 JWT issuance bound to an account's email
//! - Silent validity checks (`validate`)
//! - Subject extraction with distinguishable failures (`extract_subject`)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, MIN_SECRET_BYTES};
pub use service::{Claims, TokenService};
