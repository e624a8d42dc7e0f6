use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::handlers::ApiError;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/login
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "<jwt>", "user": { "id": 1, "email": "ada@example.com", ... } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Body missing or malformed
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U, H, S>(
    state: web::Data<AppState<U, H, S>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    request.validate().map_err(|e| ApiError::validation(&e))?;

    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    log::info!("User {} logged in", response.user.id);
    Ok(HttpResponse::Ok().json(response))
}
