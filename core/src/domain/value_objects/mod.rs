//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod token_validation;

// Re-export commonly used types
pub use auth_response::LoginResponse;
pub use token_validation::{TokenMetadata, TokenValidationResult};
