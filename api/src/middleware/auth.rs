//! Bearer token gate for protected endpoints.
//!
//! Each request passes through these checks in order:
//! 1. `Authorization` header present
//! 2. header is exactly `Bearer <token>`
//! 3. token not revoked
//! 4. token valid (signature, validity window, access type)
//!
//! The first failing check answers the request. On success an
//! [`AuthContext`] is inserted into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use tg_core::{
    domain::entities::token::{Claims, BEARER_SCHEME},
    errors::TokenError,
    repositories::RevocationStore,
    services::token::TokenService,
};

use crate::handlers::ApiError;

/// Identity of the caller, available to handlers behind the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: u64,
    pub email: String,
    /// The raw bearer token, needed for logout
    pub token: String,
}

impl AuthContext {
    pub fn new(claims: Claims, token: String) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            token,
        }
    }
}

/// Middleware factory guarding a resource with token authentication
pub struct JwtAuth<S: RevocationStore> {
    token_service: Arc<TokenService<S>>,
}

impl<S: RevocationStore> JwtAuth<S> {
    pub fn new(token_service: Arc<TokenService<S>>) -> Self {
        Self { token_service }
    }
}

impl<S, B, R> Transform<S, ServiceRequest> for JwtAuth<R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: RevocationStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S, R>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

pub struct JwtAuthMiddleware<S, R: RevocationStore> {
    service: Rc<S>,
    token_service: Arc<TokenService<R>>,
}

impl<S, B, R> Service<ServiceRequest> for JwtAuthMiddleware<S, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: RevocationStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(req.headers()) {
                Ok(token) => token,
                Err(e) => {
                    log::debug!("Rejected request to {}: {}", req.path(), e);
                    return Ok(reject(req, ApiError::from(e)));
                }
            };

            let claims = match token_service.authenticate(&token).await {
                Ok(claims) => claims,
                Err(e) => return Ok(reject(req, ApiError::from(e))),
            };

            req.extensions_mut().insert(AuthContext::new(claims, token));

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(error.error_response()).map_into_right_body()
}

/// Extracts the token from an `Authorization: Bearer <token>` header
///
/// The scheme is case sensitive and must be separated from a non-empty
/// token by a single space.
pub fn extract_bearer_token(
    headers: &actix_web::http::header::HeaderMap,
) -> Result<String, TokenError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(TokenError::HeaderMissing)?
        .to_str()
        .map_err(|_| TokenError::HeaderMalformed)?;

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => Ok(token.to_string()),
        _ => Err(TokenError::HeaderMalformed),
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(TokenError::HeaderMissing).into());

        ready(result)
    }
}
