//! Authentication service module
//!
//! Password based login on top of the token lifecycle:
//! - Credential checks and token issuance
//! - Registration with hashed passwords
//! - Current-user lookup for authenticated requests

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::{AuthService, MIN_PASSWORD_LENGTH};
