//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, ConfigError, DecodeError, TokenError};

use kanbu_shared::ErrorResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Revocation store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Config(e) => e.into(),
            DomainError::Decode(e) => e.into(),
            DomainError::Token(e) => e.into(),
            DomainError::Auth(e) => e.into(),
            DomainError::Store { message } => {
                ErrorResponse::new("STORE_ERROR", format!("Revocation store error: {}", message))
            }
            DomainError::Internal { message } => {
                ErrorResponse::new("INTERNAL_ERROR", format!("Internal error: {}", message))
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
