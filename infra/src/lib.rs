//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the TokenGate server.
//! It provides concrete implementations of the collaborator traits declared
//! in `tg_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client and the Redis-backed revocation store, plus an
//!   in-process revocation store for single-node setups and tests
//! - **Database**: PostgreSQL user repository using SQLx, plus an in-memory
//!   user repository
//! - **Security**: bcrypt password hashing
//!
//! ## Features
//!
//! - `postgres`: Enable PostgreSQL support (default)

use tg_core::errors::DomainError;

/// Cache module - Redis client and revocation stores
pub mod cache;

/// Database module - user storage
pub mod database;

/// Security module - password hashing
pub mod security;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration consumed by infrastructure adapters

    pub use tg_shared::config::{CacheConfig, DatabaseConfig};
}

pub use cache::{InMemoryRevocationStore, RedisClient, RedisRevocationStore};
pub use database::InMemoryUserRepository;
#[cfg(feature = "postgres")]
pub use database::{create_pool, ensure_schema, PostgresUserRepository};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// A store call did not answer in time
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            #[cfg(feature = "postgres")]
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            InfrastructureError::Cache(_) | InfrastructureError::Timeout { .. } => {
                DomainError::store_unavailable(err.to_string())
            }
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures_map_to_unavailable() {
        let err: DomainError = InfrastructureError::Timeout {
            operation: "EXISTS",
            timeout_ms: 500,
        }
        .into();

        match err {
            DomainError::StoreUnavailable { message } => {
                assert_eq!(message, "EXISTS timed out after 500ms")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_config_error_maps_to_internal() {
        let err: DomainError = InfrastructureError::Config("bad url".to_string()).into();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
