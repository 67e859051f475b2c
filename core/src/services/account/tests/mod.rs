//! Tests for account service

mod factory_tests;
mod service_tests;
