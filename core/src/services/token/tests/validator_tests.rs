//! Unit tests for the access token validator and issuer

use chrono::Duration;
use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenType};
use crate::errors::TokenError;
use crate::services::token::{ClaimsCodec, FixedClock, TokenIssuer, TokenValidator};

use super::{identity, start, tamper_signature, SECRET};

fn setup(lifetime_secs: u64) -> (TokenIssuer, TokenValidator, Arc<FixedClock>, Arc<ClaimsCodec>) {
    let codec = Arc::new(ClaimsCodec::new(SECRET, "tokengate"));
    let clock = Arc::new(FixedClock::new(start()));
    let issuer = TokenIssuer::new(
        codec.clone(),
        clock.clone(),
        std::time::Duration::from_secs(lifetime_secs),
    );
    let validator = TokenValidator::new(codec.clone(), clock.clone());
    (issuer, validator, clock, codec)
}

#[test]
fn test_issued_token_validates_with_same_identity() {
    let (issuer, validator, _, _) = setup(3600);

    let token = issuer.issue(&identity()).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.iss, "tokengate");
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(claims.iat, start().timestamp());
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.exp, claims.iat + 3600);
}

#[test]
fn test_token_carries_no_password_material() {
    let (issuer, _, _, _) = setup(3600);
    let token = issuer.issue(&identity()).unwrap();

    let payload = token.split('.').nth(1).unwrap();
    assert!(!payload.is_empty());
    let claims: Claims = ClaimsCodec::new(SECRET, "tokengate")
        .decode(&token, start())
        .unwrap();
    let json = serde_json::to_value(claims).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_zero_lifetime_boundary() {
    let (issuer, validator, clock, _) = setup(0);
    let token = issuer.issue(&identity()).unwrap();

    assert!(validator.validate(&token).is_ok());

    clock.advance(Duration::seconds(1));
    assert_eq!(validator.validate(&token), Err(TokenError::Expired));
}

#[test]
fn test_not_yet_valid() {
    let (issuer, validator, clock, _) = setup(3600);
    clock.set(start() + Duration::hours(1));
    let token = issuer.issue(&identity()).unwrap();

    clock.set(start());
    assert_eq!(validator.validate(&token), Err(TokenError::NotYetValid));
}

#[test]
fn test_tampered_token_rejected() {
    let (issuer, validator, _, _) = setup(3600);
    let token = issuer.issue(&identity()).unwrap();

    assert_eq!(
        validator.validate(&tamper_signature(&token)),
        Err(TokenError::SignatureInvalid)
    );
    assert_eq!(validator.validate("not-a-token"), Err(TokenError::Malformed));
}

#[test]
fn test_non_access_token_rejected() {
    let (_, validator, _, codec) = setup(3600);
    let mut claims = Claims::new_access_token(&identity(), "tokengate", start(), 3600);
    claims.token_type = TokenType::Refresh;
    let token = codec.encode(&claims).unwrap();

    assert_eq!(validator.validate(&token), Err(TokenError::TokenTypeInvalid));
}
