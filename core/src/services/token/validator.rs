//! Stateless access token validation

use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenType};
use crate::errors::TokenError;

use super::clock::Clock;
use super::codec::ClaimsCodec;

/// Verifies signature, issuer, validity window and token type
///
/// Knows nothing about revocation; see `TokenService::authenticate` for the
/// full check.
pub struct TokenValidator {
    codec: Arc<ClaimsCodec>,
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    pub fn new(codec: Arc<ClaimsCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.codec.decode(token, self.clock.now())?;

        if claims.token_type != TokenType::Access {
            return Err(TokenError::TokenTypeInvalid);
        }

        Ok(claims)
    }
}
