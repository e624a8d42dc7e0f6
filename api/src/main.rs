use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;
use std::sync::Arc;

use tg_api::app::create_app;
use tg_api::config::Config;
use tg_api::middleware::cors::create_cors;
use tg_api::routes::auth::AppState;

use tg_core::services::auth::AuthService;
use tg_shared::config::AppConfig;
use tg_core::services::token::{TokenService, TokenServiceConfig};
use tg_infra::{
    create_pool, ensure_schema, BcryptPasswordHasher, PostgresUserRepository, RedisClient,
    RedisRevocationStore,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger at the environment's level unless RUST_LOG overrides it
    let app_config = AppConfig::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(app_config.logging.level.as_str()),
    );

    info!("Starting TokenGate API Server");

    let config = Config::from_app_config(app_config).context("invalid configuration")?;
    info!("Environment: {}", config.environment);

    // Revocation store
    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;
    let revocation_store = RedisRevocationStore::new(redis);

    // User store
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to PostgreSQL")?;
    ensure_schema(&pool)
        .await
        .context("failed to prepare database schema")?;
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    let password_hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
    let token_service = Arc::new(TokenService::new(
        revocation_store,
        TokenServiceConfig::from(&config.auth.jwt),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        password_hasher,
        Arc::clone(&token_service),
    ));

    let app_state = web::Data::new(AppState::new(auth_service, token_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone())
            .wrap(create_cors(environment))
            .wrap(Logger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
