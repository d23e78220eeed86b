//! Main token service implementation

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair, CLAIM_EXP, CLAIM_JTI};
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::RevocationStore;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::validator::TokenValidator;

/// Service orchestrating the token lifecycle: issuance, refresh,
/// verification and denylisting
///
/// From the caller's perspective a token pair moves through
/// `issued -> valid -> (expired | denylisted)`; the two terminal states
/// have no way out.
pub struct TokenService<S: RevocationStore> {
    codec: TokenCodec,
    validator: TokenValidator<S>,
    denylist: Arc<S>,
    config: TokenServiceConfig,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// Fails when the signing configuration is invalid; configuration
    /// problems never surface at request time.
    pub fn new(denylist: Arc<S>, config: TokenServiceConfig) -> DomainResult<Self> {
        let codec = TokenCodec::new(&config)?;
        let validator = TokenValidator::new(Arc::clone(&denylist));

        Ok(Self {
            codec,
            validator,
            denylist,
            config,
        })
    }

    /// Issues a fresh access/refresh pair for a user
    ///
    /// The two tokens share the subject but never a `jti`, and each expiry
    /// is computed independently from its configured lifetime. No state is
    /// touched, so concurrent issuances need no ordering.
    pub fn issue(&self, user_id: Uuid) -> DomainResult<TokenPair> {
        let access = Claims::new_access_token(user_id, self.config.access_lifetime());
        let refresh = Claims::new_refresh_token(user_id, self.config.refresh_lifetime());

        let access_token = self.codec.encode(&access.to_claim_set())?;
        let refresh_token = self.codec.encode(&refresh.to_claim_set())?;

        debug!(%user_id, access_jti = %access.jti, refresh_jti = %refresh.jti, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
            self.config.refresh_token_expiry,
        ))
    }

    /// Exchanges a valid refresh token for a new access token
    ///
    /// The refresh token itself is left untouched: it stays usable for
    /// further refresh calls until it expires or is denylisted, and its
    /// own expiry is never extended. Callers wanting rotate-on-use
    /// semantics denylist the old token here and issue a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let set = self.codec.decode(refresh_token, true)?;
        let claims = self.validator.validate(&set, TokenKind::Refresh).await?;

        let access = Claims::new_access_token(claims.user_id, self.config.access_lifetime());
        let token = self.codec.encode(&access.to_claim_set())?;

        debug!(user_id = %claims.user_id, refresh_jti = %claims.jti, "refreshed access token");

        Ok(token)
    }

    /// Decodes and validates a token without issuing anything
    ///
    /// Introspection must be explicitly enabled in configuration; the HTTP
    /// layer maps the disabled case to 403 so the operation is never
    /// exposed unauthenticated in production.
    pub async fn verify(&self, token: &str, expected: TokenKind) -> DomainResult<Claims> {
        if !self.config.introspection_enabled {
            return Err(AuthError::IntrospectionDisabled.into());
        }

        let set = self.codec.decode(token, true)?;
        self.validator.validate(&set, expected).await
    }

    /// Inserts a refresh token's `jti` into the revocation store
    ///
    /// The token is decoded with its signature checked but without
    /// validity checks: denylisting an already-expired token is a harmless
    /// no-op. Repeating the call has no additional effect.
    pub async fn denylist(&self, refresh_token: &str) -> DomainResult<()> {
        let set = self.codec.decode(refresh_token, true)?;

        let jti = set.jti().ok_or_else(|| TokenError::MissingClaim {
            claim: CLAIM_JTI.to_string(),
        })?;
        let exp = set.exp().ok_or_else(|| TokenError::MissingClaim {
            claim: CLAIM_EXP.to_string(),
        })?;
        let expires_at =
            Utc.timestamp_opt(exp, 0)
                .single()
                .ok_or_else(|| TokenError::InvalidClaims {
                    claim: CLAIM_EXP.to_string(),
                })?;

        self.denylist.add(jti, expires_at).await?;

        debug!(%jti, "denylisted refresh token");

        Ok(())
    }
}
