//! User entity as supplied by the user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Email address, unique per user
    pub email: String,

    /// Opaque password hash produced by a `PasswordHasher`
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Identity used for token issuance
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.email.clone(), self.name.clone())
    }

    /// Public view without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Data required to create a user; the password is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

/// User as exposed to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
