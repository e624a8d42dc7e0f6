use actix_web::{web, HttpResponse};

use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for GET /api/me, returns the caller's profile
pub async fn me<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    let profile = state.auth_service.current_user(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
