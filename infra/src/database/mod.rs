//! Database module for user storage
//!
//! PostgreSQL via SQLx behind the `postgres` feature, and an in-memory
//! repository that is always available.

#[cfg(feature = "postgres")]
pub mod connection;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;


#[cfg(feature = "postgres")]
pub use connection::{create_pool, ensure_schema};
pub use memory::InMemoryUserRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresUserRepository;
