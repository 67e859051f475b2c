//! In-memory implementations
//!
//! Used by the development profile and by integration tests that do not
//! need a database. Contents are lost when the process exits.

mod account_repository;

pub use account_repository::InMemoryAccountRepository;
