//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// JWT issuer used when none is configured
pub const DEFAULT_ISSUER: &str = "tokengate";

/// Authorization scheme expected in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Kind of token a claim set represents.
///
/// Only [`TokenType::Access`] is issued and accepted. `Refresh` keeps the wire
/// format open for a second kind without letting it through the access path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user id
    pub user_id: u64,

    /// User email
    pub email: String,

    /// Token kind
    pub token_type: TokenType,

    /// Issuer
    pub iss: String,

    /// Subject (decimal user id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new access-token claims for an identity
    ///
    /// `iat` and `nbf` are both `now`; `exp` is `now + lifetime_secs`.
    pub fn new_access_token(
        identity: &Identity,
        issuer: &str,
        now: DateTime<Utc>,
        lifetime_secs: u64,
    ) -> Self {
        let issued_at = now.timestamp();
        let lifetime = i64::try_from(lifetime_secs).unwrap_or(i64::MAX);

        Self {
            user_id: identity.id,
            email: identity.email.clone(),
            token_type: TokenType::Access,
            iss: issuer.to_string(),
            sub: identity.id.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at.saturating_add(lifetime),
        }
    }

    /// Issued-at as a timestamp, `None` if out of range
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    /// Expiry as a timestamp, `None` if out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Not-before as a timestamp, `None` if out of range
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.nbf, 0).single()
    }

    /// Checks if the claims have expired at `now`
    ///
    /// Compared at full precision: half a second past `exp` is expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now > expires_at,
            None => self.exp < now.timestamp(),
        }
    }

    /// Checks if the claims are not yet active at `now`
    pub fn is_premature_at(&self, now: DateTime<Utc>) -> bool {
        match self.not_before() {
            Some(not_before) => now < not_before,
            None => self.nbf > now.timestamp(),
        }
    }
}
