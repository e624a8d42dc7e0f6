//! In-process revocation store
//!
//! Marks live only as long as the process and are invisible to other
//! instances. Suitable for tests and single-node development setups.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;

/// Revocation store keeping marks in a map with per-entry deadlines
#[derive(Clone, Default)]
pub struct InMemoryRevocationStore {
    marks: Arc<RwLock<HashMap<String, Instant>>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live marks
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.marks
            .read()
            .await
            .values()
            .filter(|deadline| **deadline > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn mark(&self, token: &str, ttl: Duration) -> Result<(), DomainError> {
        let now = Instant::now();
        let mut marks = self.marks.write().await;
        marks.retain(|_, deadline| *deadline > now);
        marks.insert(token.to_string(), now + ttl);
        Ok(())
    }

    async fn is_marked(&self, token: &str) -> Result<bool, DomainError> {
        let marks = self.marks.read().await;
        Ok(marks
            .get(token)
            .is_some_and(|deadline| *deadline > Instant::now()))
    }
}
