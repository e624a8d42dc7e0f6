use actix_web::{web, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/logout
///
/// Revokes the bearer token that authenticated this request. Requires
/// authentication via Bearer token in Authorization header.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "successfully logged out" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, revoked or invalid token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn logout<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    state.token_service.revoke(&auth.token).await?;

    log::info!("User {} logged out", auth.user_id);
    Ok(HttpResponse::Ok().json(LogoutResponse {
        message: "successfully logged out".to_string(),
    }))
}
