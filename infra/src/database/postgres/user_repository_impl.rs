//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use tg_core::domain::entities::user::{NewUser, User};
use tg_core::errors::{AuthError, DomainError};
use tg_core::repositories::UserRepository;

/// PostgreSQL implementation of UserRepository
///
/// Relies on the unique index on `users.email` to reject duplicates, so two
/// concurrent registrations cannot both succeed.
pub struct PostgresUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let id: i64 = row.try_get("id").map_err(column_error("id"))?;

        Ok(User {
            id: u64::try_from(id).map_err(|_| DomainError::Database {
                message: format!("Negative user id: {}", id),
            })?,
            email: row.try_get("email").map_err(column_error("email"))?,
            password_hash: row.try_get("password").map_err(column_error("password"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password, name, created_at, updated_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let query = r#"
            SELECT id, email, password, name, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (email, password, name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, email, password, name, created_at, updated_at
        "#;

        let row = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::from(AuthError::UserAlreadyExists)
                }
                _ => DomainError::Database {
                    message: format!("Failed to create user: {}", e),
                },
            })?;

        Self::row_to_user(&row)
    }
}
