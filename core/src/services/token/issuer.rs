//! Token issuance for authenticated identities

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::clock::Clock;
use super::codec::ClaimsCodec;

/// Builds and signs access tokens
///
/// Issuance writes nothing to any store; a token exists only in the hands
/// of whoever received it.
pub struct TokenIssuer {
    codec: Arc<ClaimsCodec>,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(codec: Arc<ClaimsCodec>, clock: Arc<dyn Clock>, lifetime: Duration) -> Self {
        Self {
            codec,
            clock,
            lifetime,
        }
    }

    /// Issue a signed access token valid from now for the configured lifetime
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        let claims = Claims::new_access_token(
            identity,
            self.codec.issuer(),
            self.clock.now(),
            self.lifetime.as_secs(),
        );
        self.codec.encode(&claims)
    }
}
