//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

use crate::utils::duration::parse_duration;

/// Secret used when `JWT_SECRET` is not provided. Refused in production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Token lifetime used when `TOKEN_EXPIRY` is absent or unparsable (24 hours)
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 86_400;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// JWT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing tokens
    pub secret: String,

    /// Token lifetime in seconds. Also used as the TTL of revocation marks.
    pub token_lifetime_secs: u64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_lifetime_secs(mut self, secs: u64) -> Self {
        self.token_lifetime_secs = secs;
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `TOKEN_EXPIRY` accepts durations such as `24h`, `90m`, `1h30m` or a
    /// plain number of seconds; anything else falls back to 24 hours.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let token_lifetime_secs = std::env::var("TOKEN_EXPIRY")
            .ok()
            .and_then(|raw| parse_duration(&raw))
            .map(|d| d.as_secs())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer());
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            jwt: JwtConfig {
                secret,
                token_lifetime_secs,
                issuer,
            },
            bcrypt_cost,
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get the token lifetime in seconds
    pub fn token_lifetime_secs(&self) -> u64 {
        self.jwt.token_lifetime_secs
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_issuer() -> String {
    String::from("tokengate")
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
