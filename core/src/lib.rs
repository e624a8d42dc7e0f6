//! # TokenGate Core
//!
//! Core business logic and domain layer for the TokenGate server.
//! This crate contains domain entities, the token lifecycle services,
//! repository interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Identity, NewUser, TokenType, User, UserProfile};
pub use domain::value_objects::{LoginResponse, TokenMetadata, TokenValidationResult};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{RevocationStore, UserRepository};
pub use services::{AuthService, PasswordHasher, TokenService, TokenServiceConfig};
