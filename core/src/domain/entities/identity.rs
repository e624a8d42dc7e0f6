//! Authenticated identity a token is issued for.

use serde::{Deserialize, Serialize};

/// Identity of a caller whose credentials have already been checked.
///
/// Deliberately carries no password material, so nothing secret can leak
/// into a claim set built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric user id
    pub id: u64,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,
}

impl Identity {
    /// Creates a new identity
    pub fn new(id: u64, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
        }
    }
}
