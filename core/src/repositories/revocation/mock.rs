//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// Mock revocation store for testing
///
/// Records marks with their TTL and can be switched into an outage mode
/// where every call fails with `StoreUnavailable`.
pub struct MockRevocationStore {
    marks: Arc<RwLock<HashMap<String, Duration>>>,
    unavailable: AtomicBool,
    lookups: AtomicUsize,
}

impl MockRevocationStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            marks: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Simulate the store going down or coming back
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// TTL recorded for a token, if marked
    pub async fn ttl_of(&self, token: &str) -> Option<Duration> {
        self.marks.read().await.get(token).copied()
    }

    /// Number of marks held
    pub async fn len(&self) -> usize {
        self.marks.read().await.len()
    }

    /// Number of `is_marked` calls served
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("mock store offline"));
        }
        Ok(())
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn mark(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        self.check_available()?;
        self.marks.write().await.insert(token.to_string(), ttl);
        Ok(())
    }

    async fn is_marked(&self, token: &str) -> Result<bool, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.marks.read().await.contains_key(token))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_available()
    }
}
