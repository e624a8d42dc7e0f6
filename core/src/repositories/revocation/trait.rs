//! Revocation store contract used to invalidate tokens before their expiry.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Shared TTL key-value store recording revoked tokens
///
/// A mark must be visible to every process that validates tokens, so
/// production deployments back this with a networked store.
///
/// # Contract
/// - `mark` is idempotent; marking an already-marked token refreshes its TTL
/// - `is_marked` returns `Ok(false)` only when no mark exists
/// - Connection failures and timeouts are reported as
///   [`DomainError::StoreUnavailable`], never as "not marked"
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record `token` as revoked for `ttl`
    ///
    /// # Example
    /// ```no_run
    /// # use std::time::Duration;
    /// # use tg_core::repositories::RevocationStore;
    /// # async fn example(store: &impl RevocationStore) -> Result<(), Box<dyn std::error::Error>> {
    /// store.mark("eyJhbGciOiJIUzI1NiJ9.e30.sig", Duration::from_secs(86_400)).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn mark(&self, token: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Check whether `token` carries a live revocation mark
    async fn is_marked(&self, token: &str) -> Result<bool, DomainError>;

    /// Check that the store answers; in-process stores always do
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
