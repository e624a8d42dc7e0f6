//! Login response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserProfile;

/// Returned after a successful password check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Signed access token
    pub token: String,

    /// The authenticated user, without password material
    pub user: UserProfile,
}

impl LoginResponse {
    /// Creates a new login response
    pub fn new(token: String, user: UserProfile) -> Self {
        Self { token, user }
    }
}
