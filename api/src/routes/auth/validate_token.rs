use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{TokenValidationResponse, ValidateTokenRequest};
use crate::handlers::ApiError;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/validate-token
///
/// Reports whether a token is currently usable. A rejected token is still
/// a 200 with `valid: false`; only a revocation store outage is an error.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "valid": true,
///     "message": "token is valid",
///     "metadata": { "user_id": 1, "email": "ada@example.com", "issued_at": "...", "expires_at": "..." },
///     "remaining_time_seconds": 86399
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty or missing token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn validate_token<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<ValidateTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    request.validate().map_err(|e| ApiError::validation(&e))?;

    let result = state.token_service.validate_for_use(&request.token).await?;

    Ok(HttpResponse::Ok().json(TokenValidationResponse::from(result)))
}
