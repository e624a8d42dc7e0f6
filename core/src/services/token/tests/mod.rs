//! Tests for the token lifecycle services

mod service_tests;
mod validator_tests;

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::identity::Identity;
use crate::repositories::MockRevocationStore;

use super::{FixedClock, TokenService, TokenServiceConfig};

pub(super) const SECRET: &str = "test-secret-for-token-lifecycle";

pub(super) fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub(super) fn identity() -> Identity {
    Identity::new(42, "ada@example.com", "Ada Lovelace")
}

pub(super) fn config(lifetime_secs: u64) -> TokenServiceConfig {
    TokenServiceConfig::new(SECRET, Duration::from_secs(lifetime_secs))
}

pub(super) fn service_at(
    lifetime_secs: u64,
) -> (TokenService<MockRevocationStore>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(start()));
    let service = TokenService::with_clock(
        MockRevocationStore::new(),
        config(lifetime_secs),
        clock.clone(),
    );
    (service, clock)
}

/// Replace the first signature character with a different base64url character
pub(super) fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}
