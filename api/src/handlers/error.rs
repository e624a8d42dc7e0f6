use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use std::fmt;
use validator::ValidationErrors;

use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Message for request bodies that cannot be parsed or fail validation
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// Message for tokens that fail validation at the gate
pub const INVALID_TOKEN_MESSAGE: &str = "invalid or expired token";

/// Message returned while the revocation store cannot be reached
pub const STORE_UNAVAILABLE_MESSAGE: &str = "revocation store unavailable";

/// Error type returned by handlers and the authentication middleware
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, message)
    }

    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            STORE_UNAVAILABLE_MESSAGE,
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            message,
        )
    }

    /// Request body failed field validation
    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        log::debug!("Rejected request body, invalid fields: {:?}", fields);
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            format!("{}: {}", INVALID_BODY_MESSAGE, fields.join(", ")),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        ErrorResponse::new(self.code, self.message.clone()).to_response(self.status)
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::HeaderMissing | TokenError::HeaderMalformed | TokenError::Revoked => {
                ApiError::unauthorized(error.to_string())
            }
            TokenError::GenerationFailed => ApiError::internal(error.to_string()),
            _ => ApiError::unauthorized(INVALID_TOKEN_MESSAGE),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Token(token_error) => token_error.into(),
            DomainError::Auth(auth_error) => match auth_error {
                AuthError::InvalidCredentials | AuthError::UserNotFound => {
                    ApiError::unauthorized(auth_error.to_string())
                }
                AuthError::UserAlreadyExists => ApiError::new(
                    StatusCode::CONFLICT,
                    error_codes::CONFLICT,
                    auth_error.to_string(),
                ),
                AuthError::PasswordHashingFailed => {
                    log::error!("Password hashing failed");
                    ApiError::internal(auth_error.to_string())
                }
            },
            DomainError::Validation { message } => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::VALIDATION_ERROR,
                message,
            ),
            DomainError::NotFound { resource } => ApiError::new(
                StatusCode::NOT_FOUND,
                error_codes::NOT_FOUND,
                format!("{} not found", resource),
            ),
            DomainError::StoreUnavailable { message } => {
                log::error!("Revocation store unavailable: {}", message);
                ApiError::service_unavailable()
            }
            DomainError::Database { message } | DomainError::Internal { message } => {
                log::error!("Internal error: {}", message);
                ApiError::internal("internal server error")
            }
        }
    }
}

/// Turns JSON extraction failures into the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Failed to parse JSON body: {}", err);
    ApiError::bad_request(INVALID_BODY_MESSAGE).into()
}
