//! Authentication route handlers
//!
//! This module contains the account and token endpoints:
//! - Login and registration
//! - Token validation
//! - Logout (revocation) and current-user lookup, both behind the gate

pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod validate_token;

use std::sync::Arc;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::{AuthService, PasswordHasher};
use tg_core::services::token::TokenService;

/// Application state that holds shared services
pub struct AppState<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher,
    S: RevocationStore,
{
    pub auth_service: Arc<AuthService<U, H, S>>,
    pub token_service: Arc<TokenService<S>>,
}

impl<U, H, S> AppState<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher,
    S: RevocationStore,
{
    pub fn new(auth_service: Arc<AuthService<U, H, S>>, token_service: Arc<TokenService<S>>) -> Self {
        Self {
            auth_service,
            token_service,
        }
    }
}
