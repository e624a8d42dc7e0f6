//! Compact signed token encoding (JWT, HS256)

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Reasons a token fails to decode
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token is not active yet")]
    NotYetValid,

    #[error("token claims were rejected")]
    ClaimsRejected,
}

impl From<DecodeError> for TokenError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Malformed => TokenError::Malformed,
            DecodeError::SignatureInvalid => TokenError::SignatureInvalid,
            DecodeError::Expired => TokenError::Expired,
            DecodeError::NotYetValid => TokenError::NotYetValid,
            DecodeError::ClaimsRejected => TokenError::InvalidClaims,
        }
    }
}

/// Signs and verifies claim sets with a shared secret
///
/// Pure and immutable after construction, so one instance can be shared
/// across every worker.
pub struct ClaimsCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
}

impl ClaimsCodec {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();

        // Time is checked against the injected clock in `decode`, not here
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer,
        }
    }

    /// Issuer bound to this codec
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Serialize and sign a claim set
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verify a token and check its validity window at `now`
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DecodeError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName => DecodeError::SignatureInvalid,
                ErrorKind::InvalidIssuer => DecodeError::ClaimsRejected,
                _ => DecodeError::Malformed,
            })?;

        if claims.issued_at().is_none() || claims.expires_at().is_none() || claims.exp < claims.iat
        {
            return Err(DecodeError::Malformed);
        }

        if claims.is_expired_at(now) {
            return Err(DecodeError::Expired);
        }

        if claims.is_premature_at(now) {
            return Err(DecodeError::NotYetValid);
        }

        Ok(claims)
    }
}

/// Short, non-reversible label for a token, safe to put in logs
pub fn token_fingerprint(token: &str) -> String {
    let tail: Vec<char> = token.chars().rev().take(8).collect();
    format!("…{}", tail.into_iter().rev().collect::<String>())
}
