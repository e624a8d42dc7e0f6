//! Domain-specific error types for authentication and token handling
//!
//! Display strings double as the human-facing messages the API returns, so
//! they are part of the external contract.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are never told apart
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("no user found")]
    UserNotFound,

    #[error("failed to process password")]
    PasswordHashingFailed,
}

/// Token-related errors
///
/// Closed taxonomy covering every way a bearer token can be refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("authorization header is required")]
    HeaderMissing,

    #[error("invalid authorization header format")]
    HeaderMalformed,

    #[error("token has been revoked")]
    Revoked,

    #[error("token has expired")]
    Expired,

    #[error("token is not active yet")]
    NotYetValid,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token is malformed")]
    Malformed,

    #[error("invalid token type")]
    TokenTypeInvalid,

    #[error("token claims are invalid")]
    InvalidClaims,

    #[error("failed to generate token")]
    GenerationFailed,
}

impl TokenError {
    /// Message reported by the validate-token operation for this failure
    pub fn validation_message(&self) -> &'static str {
        match self {
            TokenError::Expired => "token has expired",
            TokenError::NotYetValid => "token is not active yet",
            TokenError::Malformed => "token is malformed",
            TokenError::TokenTypeInvalid => "invalid token type",
            _ => "invalid token",
        }
    }

    /// Whether this error means the caller is not authenticated
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, TokenError::GenerationFailed)
    }
}
