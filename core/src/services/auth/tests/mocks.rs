//! Test doubles for the authentication service

use async_trait::async_trait;

use crate::errors::AuthError;
use crate::services::auth::PasswordHasher;

/// Reversible stand-in for a real password hash
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(password)
    }
}

/// Hasher that always fails
pub struct BrokenHasher;

#[async_trait]
impl PasswordHasher for BrokenHasher {
    async fn hash(&self, _password: &str) -> Result<String, AuthError> {
        Err(AuthError::PasswordHashingFailed)
    }

    async fn verify(&self, _password: &str, _hash: &str) -> bool {
        false
    }
}
