//! Result of checking whether a token is currently usable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entities::token::Claims;

/// Message returned for tokens that carry a revocation mark
pub const REVOKED_MESSAGE: &str = "revoked";

/// Message returned for usable tokens
pub const VALID_MESSAGE: &str = "token is valid";

/// Metadata extracted from a valid token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub user_id: u64,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenMetadata {
    /// Builds metadata from claims, `None` if a timestamp is out of range
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id,
            email: claims.email.clone(),
            issued_at: claims.issued_at()?,
            expires_at: claims.expires_at()?,
        })
    }
}

/// Outcome of `TokenService::validate_for_use`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValidationResult {
    pub valid: bool,
    pub message: String,
    pub metadata: Option<TokenMetadata>,
    /// Time left before expiry; never negative
    pub remaining_time: Option<Duration>,
}

impl TokenValidationResult {
    /// A usable token
    pub fn valid(metadata: TokenMetadata, remaining_time: Duration) -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
            metadata: Some(metadata),
            remaining_time: Some(remaining_time),
        }
    }

    /// A rejected token with a human-facing reason
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            metadata: None,
            remaining_time: None,
        }
    }

    /// A token rejected because it was revoked
    pub fn revoked() -> Self {
        Self::invalid(REVOKED_MESSAGE)
    }

    /// Remaining lifetime in whole seconds, truncated
    pub fn remaining_seconds(&self) -> Option<i64> {
        self.remaining_time
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
