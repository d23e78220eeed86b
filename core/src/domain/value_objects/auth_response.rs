//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::TokenPair;

/// Authentication response containing tokens and subject metadata
///
/// Returned after a successful login. The access token travels as
/// `auth_token` and the refresh token as `refresh`, matching the public
/// API contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Subject principal identifier
    pub user_id: Uuid,

    /// Username of the authenticated principal
    pub username: String,

    /// Display name, when the account has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// JWT access token for API authentication
    pub auth_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and principal
    pub fn from_token_pair(pair: TokenPair, principal: &Principal) -> Self {
        Self {
            user_id: principal.id,
            username: principal.username.clone(),
            full_name: principal.full_name.clone(),
            auth_token: pair.access_token,
            refresh: pair.refresh_token,
            expires_in: pair.access_expires_in,
        }
    }
}
