//! Claim-level validation of decoded tokens.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::token::{ClaimSet, Claims, TokenKind};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::RevocationStore;

/// Decides whether a decoded claim mapping represents a currently-usable
/// token of an expected kind
///
/// Holds the revocation store it consults for refresh tokens explicitly;
/// it only ever reads from it.
pub struct TokenValidator<S: RevocationStore> {
    denylist: Arc<S>,
}

impl<S: RevocationStore> TokenValidator<S> {
    /// Creates a validator reading from the given revocation store
    pub fn new(denylist: Arc<S>) -> Self {
        Self { denylist }
    }

    /// Validates a claim mapping against the expected token kind
    ///
    /// The current time is sampled exactly once at entry, so a token valid
    /// at the start of the call is not invalidated by clock movement
    /// mid-check. Every failure carries its precise reason: missing type,
    /// wrong type, missing expiry, expired, or denylisted. The denylist is
    /// consulted for refresh tokens only.
    pub async fn validate(&self, set: &ClaimSet, expected: TokenKind) -> DomainResult<Claims> {
        let now = Utc::now().timestamp();

        let token_type = set.token_type().ok_or(TokenError::MissingType)?;
        if token_type != expected.as_str() {
            return Err(TokenError::WrongType {
                expected: expected.as_str().to_string(),
                actual: token_type.to_string(),
            }
            .into());
        }

        let exp = set.exp().ok_or(TokenError::MissingExpiry)?;
        if now >= exp {
            return Err(TokenError::Expired.into());
        }

        if expected == TokenKind::Refresh {
            if let Some(jti) = set.jti() {
                if self.denylist.contains(jti).await? {
                    return Err(TokenError::Denylisted.into());
                }
            }
        }

        Claims::from_claim_set(set).map_err(Into::into)
    }
}
