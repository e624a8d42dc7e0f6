//! Redis-backed revocation store

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;
use tg_core::services::token::token_fingerprint;

use super::redis_client::RedisClient;

/// Key prefix for revocation marks
pub const REVOCATION_KEY_PREFIX: &str = "blacklist:";

const MARK_VALUE: &str = "true";

/// Revocation marks stored as `blacklist:<token>` keys with a TTL
///
/// Shared by every server instance pointing at the same Redis, so a logout
/// on one node is honoured by all of them.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Underlying client, for health checks
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

/// Redis key holding the mark for `token`
pub(crate) fn revocation_key(token: &str) -> String {
    format!("{}{}", REVOCATION_KEY_PREFIX, token)
}

/// Redis rejects `SET EX 0`; round sub-second TTLs up to one second
pub(crate) fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn mark(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(&revocation_key(token), MARK_VALUE, ttl_seconds(ttl))
            .await?;
        debug!(token = %token_fingerprint(token), ttl_secs = ttl_seconds(ttl), "Stored revocation mark");
        Ok(())
    }

    async fn is_marked(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.client.exists(&revocation_key(token)).await?)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        if self.client.health_check().await? {
            Ok(())
        } else {
            Err(DomainError::store_unavailable("unexpected PING reply"))
        }
    }
}
