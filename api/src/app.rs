//! Application factory
//!
//! Builds the actix-web application around shared services. Logging and
//! CORS are added by the caller so tests get the bare routing table.

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    web, App, Error, HttpResponse,
};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::json_error_handler;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{
    login::login, logout::logout, me::me, register::register, validate_token::validate_token,
    AppState,
};
use crate::routes::health::health;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;
use tg_shared::errors::error_codes;

/// Create and configure the application with all dependencies
pub fn create_app<U, H, S>(
    app_state: web::Data<AppState<U, H, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    let token_service = app_state.token_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::<U, H, S>))
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login::<U, H, S>))
                .route("/register", web::post().to(register::<U, H, S>))
                .route("/validate-token", web::post().to(validate_token::<U, H, S>))
                .service(
                    web::resource("/logout")
                        .wrap(JwtAuth::new(token_service.clone()))
                        .route(web::post().to(logout::<U, H, S>)),
                )
                .service(
                    web::resource("/me")
                        .wrap(JwtAuth::new(token_service))
                        .route(web::get().to(me::<U, H, S>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "the requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
