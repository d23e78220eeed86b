//! Unit tests for error conversions and display formatting.

use kanbu_shared::ErrorResponse;

use crate::errors::{AuthError, ConfigError, DecodeError, DomainError, TokenError};

#[test]
fn test_token_error_conversion() {
    let error = TokenError::Expired;
    let response: ErrorResponse = error.into();

    assert_eq!(response.error, "TOKEN_EXPIRED");
    assert!(response.message.contains("Token expired"));
}

#[test]
fn test_denylisted_error_conversion() {
    let response: ErrorResponse = TokenError::Denylisted.into();

    assert_eq!(response.error, "TOKEN_DENYLISTED");
}

#[test]
fn test_wrong_type_error_message() {
    let error = TokenError::WrongType {
        expected: "refresh".to_string(),
        actual: "access".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("expected 'refresh'"));
    assert!(message.contains("got 'access'"));
}

#[test]
fn test_decode_error_conversion() {
    let response: ErrorResponse = DecodeError::Malformed.into();
    assert_eq!(response.error, "INVALID_TOKEN");

    let response: ErrorResponse = DecodeError::InvalidSignature.into();
    assert_eq!(response.error, "INVALID_SIGNATURE");
}

#[test]
fn test_config_error_conversion() {
    let error = ConfigError::UnrecognizedAlgorithm {
        algorithm: "NONE".to_string(),
    };
    let response: ErrorResponse = error.into();

    assert_eq!(response.error, "CONFIGURATION_ERROR");
    assert!(response.message.contains("'NONE'"));
}

#[test]
fn test_auth_error_conversion() {
    let response: ErrorResponse = AuthError::InvalidCredentials.into();
    assert_eq!(response.error, "INVALID_CREDENTIALS");
    assert_eq!(response.message, "Invalid credentials");
}

#[test]
fn test_domain_error_bridges_inner_codes() {
    let err: DomainError = TokenError::Denylisted.into();
    let response: ErrorResponse = err.into();
    assert_eq!(response.error, "TOKEN_DENYLISTED");

    let err: DomainError = DecodeError::Malformed.into();
    let response: ErrorResponse = err.into();
    assert_eq!(response.error, "INVALID_TOKEN");

    let err = DomainError::Store {
        message: "connection refused".to_string(),
    };
    let response: ErrorResponse = err.into();
    assert_eq!(response.error, "STORE_ERROR");
    assert!(response.message.contains("connection refused"));
}
