//! Password hashing contract

use async_trait::async_trait;

use crate::errors::AuthError;

/// One-way password hashing and comparison
///
/// Hashes are opaque strings; only the implementation that produced a hash
/// can interpret it. Hashing is CPU bound, so implementations run it off
/// the async worker.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Compare a plaintext password with a stored hash
    ///
    /// An unreadable hash is reported as a mismatch.
    async fn verify(&self, password: &str, hash: &str) -> bool;
}
