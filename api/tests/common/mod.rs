//! Shared fixtures for API integration tests
#![allow(dead_code)]

use actix_web::{dev::ServiceResponse, test, web};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use tg_api::routes::auth::AppState;
use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;
use tg_core::services::auth::AuthService;
use tg_core::services::token::{FixedClock, TokenService, TokenServiceConfig};
use tg_core::Identity;
use tg_infra::{BcryptPasswordHasher, InMemoryRevocationStore, InMemoryUserRepository};

pub const SECRET: &str = "integration-test-secret";
pub const LIFETIME_SECS: u64 = 3600;
pub const PASSWORD: &str = "correct horse";

pub type TestState<S> = AppState<InMemoryUserRepository, BcryptPasswordHasher, S>;

/// Revocation store that is always unreachable
pub struct UnreachableStore;

#[async_trait]
impl RevocationStore for UnreachableStore {
    async fn mark(&self, _token: &str, _ttl: Duration) -> Result<(), DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn is_marked(&self, _token: &str) -> Result<bool, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }
}

pub struct TestContext<S: RevocationStore> {
    pub state: web::Data<TestState<S>>,
    pub token_service: Arc<TokenService<S>>,
    pub clock: Arc<FixedClock>,
}

impl<S: RevocationStore + 'static> TestContext<S> {
    /// Signs a token for an identity without touching the user store
    pub fn token_for(&self, id: u64, email: &str) -> String {
        self.token_service
            .issue_token(&Identity::new(id, email, "Test User"))
            .unwrap()
    }

    /// Registers a user through the service layer and returns a login token
    pub async fn register_and_login(&self, email: &str) -> String {
        self.state
            .auth_service
            .register(email, PASSWORD, "Test User")
            .await
            .unwrap();
        self.state
            .auth_service
            .login(email, PASSWORD)
            .await
            .unwrap()
            .token
    }
}

/// Whole-second instant so remaining lifetimes come out exact
pub fn start_time() -> DateTime<Utc> {
    Utc.timestamp_opt(Utc::now().timestamp(), 0).unwrap()
}

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig::new(SECRET, Duration::from_secs(LIFETIME_SECS))
}

pub fn context_with_store<S: RevocationStore + 'static>(store: S) -> TestContext<S> {
    let clock = Arc::new(FixedClock::new(start_time()));
    let token_service = Arc::new(TokenService::with_clock(
        store,
        token_config(),
        clock.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::clone(&token_service),
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, Arc::clone(&token_service))),
        token_service,
        clock,
    }
}

pub fn context() -> TestContext<InMemoryRevocationStore> {
    context_with_store(InMemoryRevocationStore::new())
}

pub async fn json_body(resp: ServiceResponse) -> serde_json::Value {
    test::read_body_json(resp).await
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Flips the first character of the signature segment
pub fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}
