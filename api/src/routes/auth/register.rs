use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::ApiError;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/register
///
/// Creates an account. Passwords shorter than six characters are refused
/// and a duplicate email answers 409.
pub async fn register<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    request.validate().map_err(|e| ApiError::validation(&e))?;

    let RegisterRequest {
        email,
        password,
        name,
    } = request.into_inner();

    let user = state
        .auth_service
        .register(&email, &password, &name)
        .await?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        message: "user created successfully".to_string(),
        user,
    }))
}
