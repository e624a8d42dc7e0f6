//! Unit tests for token service

use chrono::Duration as ChronoDuration;
use std::time::Duration;

use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenService;
use crate::repositories::MockRevocationStore;

use super::{config, identity, service_at, tamper_signature};

#[tokio::test]
async fn test_issue_and_authenticate() {
    let (service, _) = service_at(3600);

    let token = service.issue_token(&identity()).unwrap();
    let claims = service.authenticate(&token).await.unwrap();

    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.email, "ada@example.com");
}

#[tokio::test]
async fn test_validate_for_use_reports_metadata() {
    let (service, clock) = service_at(3600);
    let token = service.issue_token(&identity()).unwrap();

    clock.advance(ChronoDuration::milliseconds(1500));
    let result = service.validate_for_use(&token).await.unwrap();

    assert!(result.valid);
    assert_eq!(result.message, "token is valid");
    let metadata = result.metadata.as_ref().unwrap();
    assert_eq!(metadata.user_id, 42);
    assert_eq!(metadata.email, "ada@example.com");
    assert_eq!(metadata.expires_at - metadata.issued_at, ChronoDuration::hours(1));
    assert_eq!(result.remaining_time, Some(Duration::from_millis(3_598_500)));
    assert_eq!(result.remaining_seconds(), Some(3598));
}

#[tokio::test]
async fn test_remaining_time_never_negative() {
    let (service, clock) = service_at(60);
    let token = service.issue_token(&identity()).unwrap();

    clock.advance(ChronoDuration::seconds(60));
    let result = service.validate_for_use(&token).await.unwrap();
    assert!(result.valid);
    assert_eq!(result.remaining_time, Some(Duration::ZERO));

    clock.advance(ChronoDuration::milliseconds(500));
    let result = service.validate_for_use(&token).await.unwrap();
    assert!(!result.valid);
    assert_eq!(result.message, "token has expired");
    assert!(result.remaining_time.is_none());
}

#[tokio::test]
async fn test_zero_lifetime_expires_right_after_issue() {
    let (service, clock) = service_at(0);
    let token = service.issue_token(&identity()).unwrap();
    assert!(service.authenticate(&token).await.is_ok());

    clock.advance(ChronoDuration::milliseconds(1));
    assert!(matches!(
        service.authenticate(&token).await,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn test_validate_for_use_messages() {
    let (service, clock) = service_at(60);
    let token = service.issue_token(&identity()).unwrap();

    let tampered = service.validate_for_use(&tamper_signature(&token)).await.unwrap();
    assert!(!tampered.valid);
    assert_eq!(tampered.message, "invalid token");

    let garbage = service.validate_for_use("garbage").await.unwrap();
    assert_eq!(garbage.message, "token is malformed");

    clock.advance(ChronoDuration::seconds(61));
    let expired = service.validate_for_use(&token).await.unwrap();
    assert!(!expired.valid);
    assert_eq!(expired.message, "token has expired");
    assert!(expired.metadata.is_none());
    assert!(expired.remaining_time.is_none());
}

#[tokio::test]
async fn test_revocation_takes_precedence() {
    let (service, _) = service_at(3600);
    let token = service.issue_token(&identity()).unwrap();

    service.revoke(&token).await.unwrap();

    // Still cryptographically valid
    assert!(service.validate(&token).is_ok());

    let result = service.validate_for_use(&token).await.unwrap();
    assert!(!result.valid);
    assert_eq!(result.message, "revoked");

    let err = service.authenticate(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
}

#[tokio::test]
async fn test_revoke_uses_full_lifetime_ttl() {
    let (service, _) = service_at(7200);
    let token = service.issue_token(&identity()).unwrap();

    service.revoke(&token).await.unwrap();

    assert_eq!(service.lifetime(), Duration::from_secs(7200));
    assert_eq!(service.store().ttl_of(&token).await, Some(Duration::from_secs(7200)));
}

#[tokio::test]
async fn test_revoke_is_idempotent_for_any_input() {
    let (service, clock) = service_at(10);
    let token = service.issue_token(&identity()).unwrap();

    service.revoke(&token).await.unwrap();
    service.revoke(&token).await.unwrap();

    clock.advance(ChronoDuration::minutes(5));
    service.revoke(&token).await.unwrap();
    service.revoke("definitely-not-a-jwt").await.unwrap();

    assert_eq!(service.store().len().await, 2);
    assert!(service.is_revoked("definitely-not-a-jwt").await.unwrap());
}

#[tokio::test]
async fn test_store_outage_fails_closed() {
    let (service, _) = service_at(3600);
    let token = service.issue_token(&identity()).unwrap();
    service.store().set_unavailable(true);

    assert!(matches!(
        service.authenticate(&token).await,
        Err(DomainError::StoreUnavailable { .. })
    ));
    assert!(matches!(
        service.validate_for_use(&token).await,
        Err(DomainError::StoreUnavailable { .. })
    ));
    assert!(matches!(
        service.revoke(&token).await,
        Err(DomainError::StoreUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_check_store_follows_availability() {
    let (service, _) = service_at(3600);
    assert!(service.check_store().await.is_ok());

    service.store().set_unavailable(true);
    assert!(matches!(
        service.check_store().await,
        Err(DomainError::StoreUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_revocation_checked_before_validation() {
    let (service, _) = service_at(3600);

    let _ = service.authenticate("garbage").await;
    let _ = service.validate_for_use("garbage").await;

    assert_eq!(service.store().lookups(), 2);
}

#[tokio::test]
async fn test_system_clock_service() {
    let service = TokenService::new(MockRevocationStore::new(), config(3600));
    let token = service.issue_token(&identity()).unwrap();

    let result = service.validate_for_use(&token).await.unwrap();
    assert!(result.valid);
    assert!(result.remaining_seconds().unwrap() <= 3600);
}
