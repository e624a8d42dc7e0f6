use super::*;

#[test]
fn test_validation_messages() {
    assert_eq!(TokenError::Expired.validation_message(), "token has expired");
    assert_eq!(TokenError::NotYetValid.validation_message(), "token is not active yet");
    assert_eq!(TokenError::Malformed.validation_message(), "token is malformed");
    assert_eq!(TokenError::TokenTypeInvalid.validation_message(), "invalid token type");
    assert_eq!(TokenError::SignatureInvalid.validation_message(), "invalid token");
    assert_eq!(TokenError::InvalidClaims.validation_message(), "invalid token");
}

#[test]
fn test_only_generation_failure_is_not_unauthorized() {
    assert!(TokenError::Revoked.is_unauthorized());
    assert!(TokenError::HeaderMissing.is_unauthorized());
    assert!(!TokenError::GenerationFailed.is_unauthorized());
}

#[test]
fn test_domain_error_bridges() {
    let err: DomainError = TokenError::Revoked.into();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
    assert_eq!(err.to_string(), "token has been revoked");

    let err: DomainError = AuthError::InvalidCredentials.into();
    assert_eq!(err.to_string(), "invalid credentials");

    let err = DomainError::store_unavailable("timed out");
    assert_eq!(err.to_string(), "revocation store unavailable: timed out");
}
