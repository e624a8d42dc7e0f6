//! Database connection pool management

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

const USERS_SCHEMA: &str = include_str!("../../migrations/0001_create_users.sql");

/// Create a PostgreSQL connection pool
///
/// # Example
/// ```no_run
/// use tg_infra::config::DatabaseConfig;
/// use tg_infra::database::create_pool;
///
/// async fn connect() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(&DatabaseConfig::new("postgres://postgres@localhost/tokengate")).await?;
///     pool.close().await;
///     Ok(())
/// }
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    tracing::info!(
        "Creating database connection pool with max_connections: {}",
        config.max_connections
    );

    let connect_options = PgConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Create the `users` table if it does not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), InfrastructureError> {
    sqlx::query(USERS_SCHEMA).execute(pool).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}
