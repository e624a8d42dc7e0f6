//! Domain entities representing core business objects.

pub mod identity;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use identity::Identity;
pub use token::{Claims, TokenType, BEARER_SCHEME, DEFAULT_ISSUER};
pub use user::{NewUser, User, UserProfile};
