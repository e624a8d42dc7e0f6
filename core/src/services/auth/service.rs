//! Password login, registration and profile lookup

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::{NewUser, UserProfile};
use crate::domain::value_objects::auth_response::LoginResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::TokenService;

use super::password::PasswordHasher;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service for credential checks and account creation
pub struct AuthService<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher,
    S: RevocationStore,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Hasher for stored passwords
    password_hasher: Arc<H>,
    /// Token service used to issue tokens after a successful login
    token_service: Arc<TokenService<S>>,
}

impl<U, H, S> AuthService<U, H, S>
where
    U: UserRepository,
    H: PasswordHasher,
    S: RevocationStore,
{
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService<S>>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Check credentials and issue an access token
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash).await {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_token(&user.identity())?;
        info!(user_id = user.id, "User logged in");

        Ok(LoginResponse::new(token, user.profile()))
    }

    /// Create an account with a hashed password
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> DomainResult<UserProfile> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            });
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let user = self
            .user_repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
                name: name.to_string(),
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user.profile())
    }

    /// Profile of the user a verified token was issued to
    pub async fn current_user(&self, user_id: u64) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AuthError::UserNotFound.into())
    }
}
