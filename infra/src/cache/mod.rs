//! Cache module for revocation marks
//!
//! Provides the Redis client with bounded timeouts, the Redis-backed
//! revocation store and an in-process alternative.

pub mod memory_store;
pub mod redis_client;
pub mod revocation_store;


pub use memory_store::InMemoryRevocationStore;
pub use redis_client::RedisClient;
pub use revocation_store::{RedisRevocationStore, REVOCATION_KEY_PREFIX};
