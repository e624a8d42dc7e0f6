//! Redis cache client implementation
//!
//! Thin wrapper over a multiplexed connection. Every command is bounded by
//! the configured response timeout and is never retried: callers treat a
//! failure as "store unavailable" and decide for themselves.

use redis::{
    aio::MultiplexedConnection, AsyncCommands, Client, ConnectionAddr, ConnectionInfo,
    IntoConnectionInfo, RedisConnectionInfo, RedisResult,
};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::config::CacheConfig;
use crate::InfrastructureError;

/// Redis client with bounded connect and command timeouts
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Upper bound for a single command round-trip
    response_timeout: Duration,
}

impl RedisClient {
    /// Connect to Redis
    ///
    /// # Example
    /// ```no_run
    /// use tg_infra::config::CacheConfig;
    /// use tg_infra::cache::RedisClient;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let client = RedisClient::new(CacheConfig::new("redis://localhost:6379/0")).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let info = connection_info(&config)?;
        info!("Creating Redis client for {}", describe(&info));

        let client = Client::open(info).map_err(|e| {
            error!("Failed to create Redis client: {}", e);
            InfrastructureError::Config(format!("Invalid Redis configuration: {}", e))
        })?;

        let connect_timeout = Duration::from_millis(config.connection_timeout_ms);
        let connection = match timeout(connect_timeout, client.get_multiplexed_async_connection()).await
        {
            Ok(Ok(connection)) => connection,
            Ok(Err(e)) => {
                error!("Failed to connect to Redis: {}", e);
                return Err(InfrastructureError::Cache(e));
            }
            Err(_) => {
                error!(
                    "Timed out connecting to Redis after {}ms",
                    config.connection_timeout_ms
                );
                return Err(InfrastructureError::Timeout {
                    operation: "CONNECT",
                    timeout_ms: config.connection_timeout_ms,
                });
            }
        };

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            response_timeout: Duration::from_millis(config.response_timeout_ms),
        })
    }

    /// Set a value with expiration time in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        self.bounded("SET", conn.set_ex::<_, _, ()>(key, value, expiry_seconds))
            .await
    }

    /// Check whether a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        self.bounded("EXISTS", conn.exists::<_, bool>(key)).await
    }

    /// Check if Redis answers PING within the response timeout
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let pong: String = self
            .bounded("PING", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(pong == "PONG")
    }

    async fn bounded<T, F>(&self, operation: &'static str, command: F) -> Result<T, InfrastructureError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match timeout(self.response_timeout, command).await {
            Ok(Ok(value)) => {
                debug!("Redis {} succeeded", operation);
                Ok(value)
            }
            Ok(Err(e)) => {
                error!("Redis {} failed: {}", operation, e);
                Err(InfrastructureError::Cache(e))
            }
            Err(_) => {
                let timeout_ms = u64::try_from(self.response_timeout.as_millis()).unwrap_or(u64::MAX);
                error!("Redis {} timed out after {}ms", operation, timeout_ms);
                Err(InfrastructureError::Timeout {
                    operation,
                    timeout_ms,
                })
            }
        }
    }
}

/// Resolve the connection target from a URL or from separate parts
///
/// Passwords taken from the parts are handed to the driver as-is and never
/// pass through URL parsing.
pub(crate) fn connection_info(config: &CacheConfig) -> Result<ConnectionInfo, InfrastructureError> {
    if let Some(url) = &config.url {
        return url.as_str().into_connection_info().map_err(|e| {
            error!("Failed to parse Redis URL {}: {}", mask_url(url), e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        });
    }

    let (host, port) = match config.addr.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                InfrastructureError::Config(format!("Invalid Redis port in {}", config.addr))
            })?;
            (host.to_string(), port)
        }
        None => (config.addr.clone(), DEFAULT_REDIS_PORT),
    };
    if host.is_empty() {
        return Err(InfrastructureError::Config(format!(
            "Invalid Redis address: {:?}",
            config.addr
        )));
    }

    Ok(ConnectionInfo {
        addr: ConnectionAddr::Tcp(host, port),
        redis: RedisConnectionInfo {
            db: i64::from(config.database),
            password: config.password.clone(),
            ..Default::default()
        },
    })
}

const DEFAULT_REDIS_PORT: u16 = 6379;

/// Connection target for logs, without credentials
fn describe(info: &ConnectionInfo) -> String {
    format!("{}/{}", info.addr, info.redis.db)
}

/// Hide credentials in a connection URL before logging it
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
