//! Main authentication service implementation

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{PrincipalDirectory, RevocationStore};
use crate::services::token::TokenService;

use super::plugins::{LoginPlugin, LoginRequest};

/// Login type handled by the built-in password flow
const NORMAL_LOGIN: &str = "normal";

/// Authentication service dispatching login by type and issuing tokens
pub struct AuthService<D, S>
where
    D: PrincipalDirectory,
    S: RevocationStore,
{
    /// Principal lookup and password verification capability
    directory: Arc<D>,
    /// Token service for JWT management
    token_service: Arc<TokenService<S>>,
    /// Login plugins keyed by login type
    plugins: HashMap<String, Arc<dyn LoginPlugin>>,
}

impl<D, S> AuthService<D, S>
where
    D: PrincipalDirectory,
    S: RevocationStore,
{
    /// Creates a new authentication service
    pub fn new(directory: Arc<D>, token_service: Arc<TokenService<S>>) -> Self {
        Self {
            directory,
            token_service,
            plugins: HashMap::new(),
        }
    }

    /// Registers a login plugin under its login type name
    pub fn with_plugin(mut self, name: impl Into<String>, plugin: Arc<dyn LoginPlugin>) -> Self {
        self.plugins.insert(name.into(), plugin);
        self
    }

    /// Authenticates a login request, dispatching on its type
    ///
    /// The outcome is the throttling signal: callers key login-fail
    /// throttles on the returned error kind.
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<AuthResponse> {
        match request.login_type.as_str() {
            NORMAL_LOGIN => self.password_login(request).await,
            other => match self.plugins.get(other) {
                Some(plugin) => plugin.login(request).await,
                None => {
                    warn!(login_type = other, "rejected login with unknown type");
                    Err(AuthError::UnknownLoginType {
                        login_type: other.to_string(),
                    }
                    .into())
                }
            },
        }
    }

    /// Password login against the principal directory
    ///
    /// Unknown identifiers, wrong passwords, inactive accounts and system
    /// accounts all fail identically, so callers cannot enumerate users.
    async fn password_login(&self, request: &LoginRequest) -> DomainResult<AuthResponse> {
        let principal = match self.directory.find_active_user(&request.username).await? {
            Some(principal) => principal,
            None => {
                warn!(identifier = %request.username, "login failed: unknown or inactive principal");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if principal.is_system {
            warn!(user_id = %principal.id, "login failed: system principal");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !self
            .directory
            .verify_password(&principal, &request.password)
            .await?
        {
            warn!(user_id = %principal.id, "login failed: bad password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue(principal.id)?;
        info!(user_id = %principal.id, "login succeeded");

        Ok(AuthResponse::from_token_pair(pair, &principal))
    }

    /// Ends a session by denylisting its refresh token
    ///
    /// The paired access token is not denylistable and simply runs out its
    /// short expiry.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.token_service.denylist(refresh_token).await
    }
}
