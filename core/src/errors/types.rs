//! Error type definitions for configuration, decoding, token validation and
//! authentication failures
//!
//! Messages stay presentation-neutral; the HTTP layer owns status mapping
//! and localization.

use kanbu_shared::ErrorResponse;
use thiserror::Error;

/// Signing setup errors
///
/// Raised once at service construction and fatal there; a running service
/// never surfaces these at request time.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unrecognized algorithm type '{algorithm}'")]
    UnrecognizedAlgorithm { algorithm: String },

    #[error("Algorithm '{algorithm}' requires a verifying key")]
    MissingVerifyingKey { algorithm: String },

    #[error("Invalid signing key: {message}")]
    InvalidSigningKey { message: String },

    #[error("Invalid verifying key: {message}")]
    InvalidVerifyingKey { message: String },
}

/// Failures while turning a compact token string back into claims
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,
}

/// Claim-level validation failures
///
/// Each variant is a distinguishable reason; none is ever retried, since a
/// retry cannot change an expired or denylisted outcome.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token has no type")]
    MissingType,

    #[error("Token has wrong type: expected '{expected}', got '{actual}'")]
    WrongType { expected: String, actual: String },

    #[error("Token has no expiry")]
    MissingExpiry,

    #[error("Token expired")]
    Expired,

    #[error("Token is denylisted")]
    Denylisted,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Invalid value for claim: {claim}")]
    InvalidClaims { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication failures surfaced by the login flow
#[derive(Error, Debug)]
pub enum AuthError {
    /// Covers unknown identifiers, wrong passwords, inactive accounts and
    /// system accounts alike, so callers cannot enumerate users
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unknown login type '{login_type}'")]
    UnknownLoginType { login_type: String },

    #[error("Token introspection is disabled")]
    IntrospectionDisabled,
}

/// Convert ConfigError to ErrorResponse
impl From<ConfigError> for ErrorResponse {
    fn from(err: ConfigError) -> Self {
        ErrorResponse::new("CONFIGURATION_ERROR", err.to_string())
    }
}

/// Convert DecodeError to ErrorResponse
impl From<DecodeError> for ErrorResponse {
    fn from(err: DecodeError) -> Self {
        let error_code = match &err {
            DecodeError::Malformed => "INVALID_TOKEN",
            DecodeError::InvalidSignature => "INVALID_SIGNATURE",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::MissingType => "TOKEN_MISSING_TYPE",
            TokenError::WrongType { .. } => "TOKEN_WRONG_TYPE",
            TokenError::MissingExpiry => "TOKEN_MISSING_EXPIRY",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Denylisted => "TOKEN_DENYLISTED",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::InvalidClaims { .. } => "INVALID_CLAIMS",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UnknownLoginType { .. } => "UNKNOWN_LOGIN_TYPE",
            AuthError::IntrospectionDisabled => "INTROSPECTION_DISABLED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
