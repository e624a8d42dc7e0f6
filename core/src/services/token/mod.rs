//! Token service module for JWT management
//!
//! This module handles the whole token lifecycle:
//! - Signing and verifying claim sets
//! - Issuing access tokens for authenticated identities
//! - Stateless validation of signature, validity window and type
//! - Revocation backed by a shared store

mod clock;
mod codec;
mod config;
mod issuer;
mod service;
mod validator;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{token_fingerprint, ClaimsCodec, DecodeError};
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use service::TokenService;
pub use validator::TokenValidator;
