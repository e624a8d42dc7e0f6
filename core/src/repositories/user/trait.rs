//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own id assignment and timestamps. Email uniqueness is
/// enforced by the store; `create` reports a clash as
/// `AuthError::UserAlreadyExists`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return the stored record
    ///
    /// # Example
    /// ```no_run
    /// # use tg_core::repositories::UserRepository;
    /// # use tg_core::domain::entities::user::NewUser;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user = repo
    ///     .create(NewUser {
    ///         email: "ada@example.com".to_string(),
    ///         password_hash: "$2b$10$...".to_string(),
    ///         name: "Ada".to_string(),
    ///     })
    ///     .await?;
    /// println!("created user {}", user.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
