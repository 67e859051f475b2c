//! MySQL persistence: pool, migrations and the account repository

pub mod connection;
pub mod mysql;


pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlAccountRepository;
