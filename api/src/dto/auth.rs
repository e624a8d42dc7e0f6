use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::domain::entities::user::UserProfile;
use tg_core::domain::value_objects::token_validation::{TokenMetadata, TokenValidationResult};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    /// At least six characters
    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateTokenRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Wire form of a token validation result
///
/// Remaining lifetime is reported in whole seconds, truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenValidationResponse {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time_seconds: Option<i64>,
}

impl From<TokenValidationResult> for TokenValidationResponse {
    fn from(result: TokenValidationResult) -> Self {
        let remaining_time_seconds = result.remaining_seconds();
        Self {
            valid: result.valid,
            message: result.message,
            metadata: result.metadata,
            remaining_time_seconds,
        }
    }
}
