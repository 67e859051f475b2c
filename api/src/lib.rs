//! HTTP transport for the user account service.
//!
//! Routes, request DTOs, error-to-status mapping and application assembly.
//! The binary in `main.rs` wires configuration and storage around it.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
