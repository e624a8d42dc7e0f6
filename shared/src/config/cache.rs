//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis configuration for the revocation store
///
/// Either a full `url` or the separate `addr`, `password` and `database`
/// parts. The parts are kept apart so passwords never need URL escaping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL, takes precedence over the separate parts
    #[serde(default)]
    pub url: Option<String>,

    /// `host:port` of the Redis server
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Optional password
    #[serde(default)]
    pub password: Option<String>,

    /// Database index
    #[serde(default)]
    pub database: u8,

    /// Connection timeout in milliseconds
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// Per-command response timeout in milliseconds
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            addr: default_addr(),
            password: None,
            database: 0,
            connection_timeout_ms: default_connection_timeout_ms(),
            response_timeout_ms: default_response_timeout_ms(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` wins when present. Otherwise `REDIS_ADDR`,
    /// `REDIS_PASSWORD` and `REDIS_DB` are used as given.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").ok().filter(|v| !v.is_empty());
        let addr = std::env::var("REDIS_ADDR").unwrap_or_else(|_| default_addr());
        let password = std::env::var("REDIS_PASSWORD")
            .ok()
            .filter(|v| !v.is_empty());
        let database = std::env::var("REDIS_DB")
            .ok()
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(0);
        let connection_timeout_ms = std::env::var("REDIS_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_connection_timeout_ms);
        let response_timeout_ms = std::env::var("REDIS_RESPONSE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_response_timeout_ms);

        Self {
            url,
            addr,
            password,
            database,
            connection_timeout_ms,
            response_timeout_ms,
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a configuration from separate address, password and database
    pub fn from_parts(addr: impl Into<String>, password: Option<String>, database: u8) -> Self {
        Self {
            url: None,
            addr: addr.into(),
            password: password.filter(|p| !p.is_empty()),
            database,
            ..Default::default()
        }
    }

    /// Set the per-command response timeout
    pub fn with_response_timeout_ms(mut self, ms: u64) -> Self {
        self.response_timeout_ms = ms;
        self
    }
}

fn default_addr() -> String {
    String::from("localhost:6379")
}

fn default_connection_timeout_ms() -> u64 {
    2_000
}

fn default_response_timeout_ms() -> u64 {
    500
}
