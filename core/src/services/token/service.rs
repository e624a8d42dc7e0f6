//! Token lifecycle orchestration: issuance, usability checks and revocation

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::Claims;
use crate::domain::value_objects::token_validation::{TokenMetadata, TokenValidationResult};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationStore;

use super::clock::{Clock, SystemClock};
use super::codec::{token_fingerprint, ClaimsCodec};
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::validator::TokenValidator;

/// Service combining stateless validation with the revocation store
///
/// Revocation is always consulted before the token is decoded, and a store
/// that cannot answer is reported as an error rather than read as "not
/// revoked".
pub struct TokenService<S: RevocationStore> {
    pub(crate) store: S,
    issuer: TokenIssuer,
    validator: TokenValidator,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a token service using the system clock
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Creates a token service with an explicit time source
    pub fn with_clock(store: S, config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let codec = Arc::new(ClaimsCodec::new(&config.jwt_secret, config.issuer.clone()));

        Self {
            store,
            issuer: TokenIssuer::new(codec.clone(), clock.clone(), config.token_lifetime),
            validator: TokenValidator::new(codec, clock.clone()),
            clock,
            lifetime: config.token_lifetime,
        }
    }

    /// Lifetime of issued tokens
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// The revocation store backing this service
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Issues a signed access token for an authenticated identity
    pub fn issue_token(&self, identity: &Identity) -> Result<String, DomainError> {
        let token = self.issuer.issue(identity).map_err(|e| {
            error!(user_id = identity.id, "Failed to sign token: {}", e);
            DomainError::from(e)
        })?;

        info!(user_id = identity.id, token = %token_fingerprint(&token), "Issued access token");
        Ok(token)
    }

    /// Checks signature, validity window and type without consulting the store
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validator.validate(token)
    }

    /// Checks whether the token carries a revocation mark
    pub async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        let marked = self.store.is_marked(token).await.map_err(|e| {
            error!(token = %token_fingerprint(token), "Revocation lookup failed: {}", e);
            e
        })?;

        if marked {
            debug!(token = %token_fingerprint(token), "Token found in revocation store");
        }
        Ok(marked)
    }

    /// Full request-time check: revocation first, then validation
    ///
    /// # Errors
    ///
    /// * `TokenError::Revoked` - the token was revoked
    /// * any other `TokenError` - the token failed validation
    /// * `DomainError::StoreUnavailable` - revocation could not be checked
    pub async fn authenticate(&self, token: &str) -> Result<Claims, DomainError> {
        if self.is_revoked(token).await? {
            warn!(token = %token_fingerprint(token), "Rejected revoked token");
            return Err(TokenError::Revoked.into());
        }

        self.validator.validate(token).map_err(|e| {
            warn!(token = %token_fingerprint(token), "Rejected token: {}", e);
            DomainError::from(e)
        })
    }

    /// Reports whether a token is currently usable, with a human-facing reason
    ///
    /// Only a store outage is returned as `Err`; every token-level failure
    /// is a result with `valid == false`.
    pub async fn validate_for_use(&self, token: &str) -> Result<TokenValidationResult, DomainError> {
        if self.is_revoked(token).await? {
            return Ok(TokenValidationResult::revoked());
        }

        let claims = match self.validator.validate(token) {
            Ok(claims) => claims,
            Err(e) => return Ok(TokenValidationResult::invalid(e.validation_message())),
        };

        let Some(metadata) = TokenMetadata::from_claims(&claims) else {
            return Ok(TokenValidationResult::invalid(
                TokenError::Malformed.validation_message(),
            ));
        };

        let remaining = (metadata.expires_at - self.clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO);

        Ok(TokenValidationResult::valid(metadata, remaining))
    }

    /// Checks that the revocation store is reachable
    pub async fn check_store(&self) -> Result<(), DomainError> {
        self.store.ping().await.map_err(|e| {
            warn!("Revocation store health check failed: {}", e);
            e
        })
    }

    /// Marks a token as revoked for the full token lifetime
    ///
    /// The token is not decoded first: expired, malformed or already revoked
    /// tokens are marked all the same.
    pub async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        self.store.mark(token, self.lifetime).await.map_err(|e| {
            error!(token = %token_fingerprint(token), "Failed to revoke token: {}", e);
            e
        })?;

        info!(token = %token_fingerprint(token), "Token revoked");
        Ok(())
    }
}
