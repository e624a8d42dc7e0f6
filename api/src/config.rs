use serde::{Deserialize, Serialize};
use thiserror::Error;

use tg_shared::config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultSecretInProduction,

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_app_config(AppConfig::from_env())
    }

    /// Builds the API configuration, refusing unsafe token secrets
    pub fn from_app_config(app: AppConfig) -> Result<Self, ConfigError> {
        if app.auth.jwt.secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if app.environment.is_production() && app.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        if app.auth.jwt.is_using_default_secret() {
            log::warn!("JWT_SECRET not set, using the development secret");
        }

        Ok(Config {
            database: app.database,
            cache: app.cache,
            auth: app.auth,
            server: app.server,
            logging: app.logging,
            environment: app.environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn token_lifetime_secs(&self) -> u64 {
        self.auth.token_lifetime_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_shared::config::JwtConfig;

    fn app_config(environment: Environment, secret: Option<&str>) -> AppConfig {
        let mut app = AppConfig {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        };
        if let Some(secret) = secret {
            app.auth.jwt = JwtConfig::new(secret);
        }
        app
    }

    #[test]
    fn test_production_refuses_default_secret() {
        let result = Config::from_app_config(app_config(Environment::Production, None));
        assert_eq!(result.unwrap_err(), ConfigError::DefaultSecretInProduction);
    }

    #[test]
    fn test_empty_secret_is_refused_everywhere() {
        let result = Config::from_app_config(app_config(Environment::Development, Some("  ")));
        assert_eq!(result.unwrap_err(), ConfigError::EmptySecret);
    }

    #[test]
    fn test_development_accepts_default_secret() {
        let config = Config::from_app_config(app_config(Environment::Development, None)).unwrap();
        assert!(config.is_development());
        assert_eq!(config.token_lifetime_secs(), 86_400);
    }

    #[test]
    fn test_production_with_custom_secret() {
        let config =
            Config::from_app_config(app_config(Environment::Production, Some("prod-secret")))
                .unwrap();
        assert!(config.is_production());
        assert_eq!(config.auth.jwt_secret(), "prod-secret");
    }

    #[test]
    fn test_logging_level_follows_environment() {
        let production =
            Config::from_app_config(app_config(Environment::Production, Some("prod-secret")))
                .unwrap();
        assert_eq!(production.logging.level, "warn");

        let development =
            Config::from_app_config(app_config(Environment::Development, None)).unwrap();
        assert_eq!(development.logging.level, "debug");
    }
}
