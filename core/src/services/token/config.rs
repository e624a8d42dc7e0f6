//! Configuration for the token service

use std::time::Duration;

use tg_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_ISSUER;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Value of the `iss` claim, enforced on decode
    pub issuer: String,
    /// Lifetime of issued tokens, also the revocation mark TTL
    pub token_lifetime: Duration,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>, token_lifetime: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: DEFAULT_ISSUER.to_string(),
            token_lifetime,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            token_lifetime: Duration::from_secs(jwt.token_lifetime_secs),
        }
    }
}
