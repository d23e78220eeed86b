//! Token entities for JWT-based authentication.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::TokenError;

/// Claim carrying the token type (`access` or `refresh`)
pub const CLAIM_TOKEN_TYPE: &str = "token_type";

/// Claim carrying the expiry instant as Unix epoch seconds
pub const CLAIM_EXP: &str = "exp";

/// Claim carrying the unique token identifier
pub const CLAIM_JTI: &str = "jti";

/// Claim carrying the subject principal identifier
pub const CLAIM_USER_ID: &str = "user_id";

/// Kind of token within an issued pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived credential authorizing individual API calls
    Access,
    /// Longer-lived credential used solely to obtain new access tokens
    Refresh,
}

impl TokenKind {
    /// Claim value for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered claim mapping as carried on the wire
///
/// This is the codec's payload type. It never interprets claim semantics:
/// the reserved-claim accessors return `None` for absent or ill-typed
/// values so the validator can report a precise failure reason instead of
/// a blanket deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, Value>);

impl ClaimSet {
    /// Creates an empty claim mapping
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a claim, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw claim value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of claims in the mapping
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no claims are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all claims in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// `token_type` claim, when present as a string
    pub fn token_type(&self) -> Option<&str> {
        self.0.get(CLAIM_TOKEN_TYPE).and_then(Value::as_str)
    }

    /// `exp` claim as Unix epoch seconds, when present as an integer
    pub fn exp(&self) -> Option<i64> {
        self.0.get(CLAIM_EXP).and_then(Value::as_i64)
    }

    /// `jti` claim, when present as a string
    pub fn jti(&self) -> Option<&str> {
        self.0.get(CLAIM_JTI).and_then(Value::as_str)
    }

    /// `user_id` claim, when present as a string
    pub fn user_id(&self) -> Option<&str> {
        self.0.get(CLAIM_USER_ID).and_then(Value::as_str)
    }
}

/// Claims structure for a token payload
///
/// Reserved claims are named fields; custom claims travel in the open
/// extension map. Every token carries exactly one `token_type`, one `exp`
/// and one `jti`; the `jti` is generated at creation and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    /// Token type, immutable once set
    pub token_type: TokenKind,

    /// Expiry instant as Unix epoch seconds
    pub exp: i64,

    /// Unique token identifier (32-character lowercase hex)
    pub jti: String,

    /// Subject principal
    pub user_id: Uuid,

    /// Custom claims outside the reserved set
    pub extra: BTreeMap<String, Value>,
}

impl Claims {
    /// Creates claims for a token of the given kind expiring after `lifetime`
    pub fn new(token_type: TokenKind, user_id: Uuid, lifetime: Duration) -> Self {
        let expiry = Utc::now() + lifetime;

        Self {
            token_type,
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
            user_id,
            extra: BTreeMap::new(),
        }
    }

    /// Creates new claims for an access token
    pub fn new_access_token(user_id: Uuid, lifetime: Duration) -> Self {
        Self::new(TokenKind::Access, user_id, lifetime)
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(user_id: Uuid, lifetime: Duration) -> Self {
        Self::new(TokenKind::Refresh, user_id, lifetime)
    }

    /// Adds a custom claim to the extension map
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Flattens the claims into the wire mapping
    ///
    /// Reserved claims win over same-named entries in the extension map.
    pub fn to_claim_set(&self) -> ClaimSet {
        let mut set = ClaimSet::new();
        for (name, value) in &self.extra {
            set.insert(name.clone(), value.clone());
        }
        set.insert(CLAIM_TOKEN_TYPE, self.token_type.as_str());
        set.insert(CLAIM_EXP, self.exp);
        set.insert(CLAIM_JTI, self.jti.clone());
        set.insert(CLAIM_USER_ID, self.user_id.to_string());
        set
    }

    /// Rebuilds typed claims from a decoded mapping
    ///
    /// Fails when a required claim is absent or carries an unusable value.
    pub fn from_claim_set(set: &ClaimSet) -> Result<Self, TokenError> {
        let token_type = match set.token_type() {
            Some("access") => TokenKind::Access,
            Some("refresh") => TokenKind::Refresh,
            Some(_) => {
                return Err(TokenError::InvalidClaims {
                    claim: CLAIM_TOKEN_TYPE.to_string(),
                })
            }
            None => {
                return Err(TokenError::MissingClaim {
                    claim: CLAIM_TOKEN_TYPE.to_string(),
                })
            }
        };

        let exp = set.exp().ok_or_else(|| TokenError::MissingClaim {
            claim: CLAIM_EXP.to_string(),
        })?;

        let jti = set
            .jti()
            .ok_or_else(|| TokenError::MissingClaim {
                claim: CLAIM_JTI.to_string(),
            })?
            .to_string();

        let user_id = set.user_id().ok_or_else(|| TokenError::MissingClaim {
            claim: CLAIM_USER_ID.to_string(),
        })?;
        let user_id = Uuid::parse_str(user_id).map_err(|_| TokenError::InvalidClaims {
            claim: CLAIM_USER_ID.to_string(),
        })?;

        let extra = set
            .iter()
            .filter(|(name, _)| {
                !matches!(
                    name.as_str(),
                    CLAIM_TOKEN_TYPE | CLAIM_EXP | CLAIM_JTI | CLAIM_USER_ID
                )
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Ok(Self {
            token_type,
            exp,
            jti,
            user_id,
            extra,
        })
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, Duration::minutes(15));

        assert_eq!(claims.token_type, TokenKind::Access);
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.jti.len(), 32);
        assert!(claims.jti.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_refresh_token(user_id, Duration::days(7));

        assert_eq!(claims.token_type, TokenKind::Refresh);
        assert_eq!(claims.user_id, user_id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let user_id = Uuid::new_v4();
        let a = Claims::new_access_token(user_id, Duration::minutes(15));
        let b = Claims::new_refresh_token(user_id, Duration::days(7));

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_claims_expiration() {
        let user_id = Uuid::new_v4();
        let mut claims = Claims::new_access_token(user_id, Duration::minutes(15));

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claim_set_round_trip() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_refresh_token(user_id, Duration::days(7))
            .with_claim("tenant", "acme");

        let set = claims.to_claim_set();
        assert_eq!(set.token_type(), Some("refresh"));
        assert_eq!(set.exp(), Some(claims.exp));
        assert_eq!(set.jti(), Some(claims.jti.as_str()));
        assert_eq!(set.user_id(), Some(user_id.to_string().as_str()));

        let rebuilt = Claims::from_claim_set(&set).unwrap();
        assert_eq!(rebuilt, claims);
        assert_eq!(rebuilt.extra["tenant"], "acme");
    }

    #[test]
    fn test_reserved_claims_win_over_extension_map() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, Duration::minutes(5))
            .with_claim(CLAIM_TOKEN_TYPE, "refresh");

        let set = claims.to_claim_set();
        assert_eq!(set.token_type(), Some("access"));
    }

    #[test]
    fn test_from_claim_set_missing_claims() {
        let mut set = ClaimSet::new();
        assert!(matches!(
            Claims::from_claim_set(&set),
            Err(TokenError::MissingClaim { claim }) if claim == CLAIM_TOKEN_TYPE
        ));

        set.insert(CLAIM_TOKEN_TYPE, "access");
        assert!(matches!(
            Claims::from_claim_set(&set),
            Err(TokenError::MissingClaim { claim }) if claim == CLAIM_EXP
        ));

        set.insert(CLAIM_EXP, Utc::now().timestamp() + 60);
        assert!(matches!(
            Claims::from_claim_set(&set),
            Err(TokenError::MissingClaim { claim }) if claim == CLAIM_JTI
        ));
    }

    #[test]
    fn test_from_claim_set_rejects_unknown_type() {
        let mut set = ClaimSet::new();
        set.insert(CLAIM_TOKEN_TYPE, "sliding");
        set.insert(CLAIM_EXP, Utc::now().timestamp() + 60);
        set.insert(CLAIM_JTI, Uuid::new_v4().simple().to_string());
        set.insert(CLAIM_USER_ID, Uuid::new_v4().to_string());

        assert!(matches!(
            Claims::from_claim_set(&set),
            Err(TokenError::InvalidClaims { claim }) if claim == CLAIM_TOKEN_TYPE
        ));
    }

    #[test]
    fn test_claim_set_serialization() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, Duration::minutes(15));
        let set = claims.to_claim_set();

        let json = serde_json::to_string(&set).unwrap();
        let deserialized: ClaimSet = serde_json::from_str(&json).unwrap();

        assert_eq!(set, deserialized);
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new(
            "access_token".to_string(),
            "refresh_token".to_string(),
            300,
            604800,
        );

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();

        assert_eq!(pair, deserialized);
        assert_eq!(pair.access_expires_in, 300);
        assert_eq!(pair.refresh_expires_in, 604800);
    }
}
