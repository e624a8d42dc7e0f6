//! bcrypt implementation of the PasswordHasher trait

use async_trait::async_trait;
use tokio::task;
use tracing::error;

use tg_core::errors::AuthError;
use tg_core::services::auth::PasswordHasher;
use tg_shared::config::auth::DEFAULT_BCRYPT_COST;

/// Password hasher using bcrypt with a configurable work factor
///
/// Hashing and verification run on the blocking thread pool so a slow
/// work factor never stalls the request workers.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        let cost = self.cost;

        match task::spawn_blocking(move || bcrypt::hash(password, cost)).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(e)) => {
                error!("Failed to hash password: {}", e);
                Err(AuthError::PasswordHashingFailed)
            }
            Err(e) => {
                error!("Password hashing task failed: {}", e);
                Err(AuthError::PasswordHashingFailed)
            }
        }
    }

    async fn verify(&self, password: &str, hash: &str) -> bool {
        let password = password.to_owned();
        let hash = hash.to_owned();

        task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
            .await
            .unwrap_or(false)
    }
}
