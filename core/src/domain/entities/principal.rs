//! Subject principal as handed back by the user-management component.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal view of a user account, sufficient for credential issuance
///
/// Account storage, password hashing and profile data live in the excluded
/// user-management component; this type is only what its lookup capability
/// returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable account identifier, used as the token subject
    pub id: Uuid,

    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Display name, when the account has one
    pub full_name: Option<String>,

    /// Inactive principals can never authenticate
    pub is_active: bool,

    /// System accounts are excluded from interactive login
    pub is_system: bool,
}

impl Principal {
    /// Creates an active, non-system principal
    pub fn new(id: Uuid, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            full_name: None,
            is_active: true,
            is_system: false,
        }
    }

    /// Sets the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}
