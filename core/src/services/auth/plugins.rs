//! Login plugin interface for non-password authentication types.

use async_trait::async_trait;

use crate::domain::value_objects::AuthResponse;
use crate::errors::DomainResult;

/// A login request as received from the HTTP layer
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Login type: `"normal"` for password login, otherwise a plugin name
    pub login_type: String,

    /// Username or email address, matched case-insensitively
    pub username: String,

    /// Candidate password (plugins may ignore it)
    pub password: String,
}

impl LoginRequest {
    /// Builds a password login request
    pub fn normal(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_type: "normal".to_string(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Capability interface for pluggable login types
///
/// Plugins are handed to the auth service as an explicit name-to-plugin
/// mapping; there is no process-global registry.
#[async_trait]
pub trait LoginPlugin: Send + Sync {
    /// Authenticates the request and returns the issued tokens
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthResponse>;
}
