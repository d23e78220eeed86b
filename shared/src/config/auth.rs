//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret for HS* signing, or the PEM private key for RS*
    pub signing_key: String,

    /// PEM public key for RS* verification (unused for HS* algorithms)
    #[serde(default)]
    pub verifying_key: Option<String>,

    /// Signing algorithm name, checked against the allow-list at service
    /// construction (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Whether the token introspection operation is allowed
    #[serde(default)]
    pub introspection_enabled: bool,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            signing_key: String::from("development-secret-please-change-in-production"),
            verifying_key: None,
            algorithm: default_algorithm(),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            introspection_enabled: false,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a signing key
    pub fn new(signing_key: impl Into<String>) -> Self {
        Self {
            signing_key: signing_key.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Enable or disable the introspection operation
    pub fn with_introspection(mut self, enabled: bool) -> Self {
        self.introspection_enabled = enabled;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.signing_key == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let signing_key = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let verifying_key = std::env::var("JWT_VERIFYING_KEY").ok();
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604800);
        let introspection_enabled = std::env::var("AUTH_INTROSPECTION_ENABLED")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        Self {
            jwt: JwtConfig {
                signing_key,
                verifying_key,
                algorithm,
                access_token_expiry,
                refresh_token_expiry,
                introspection_enabled,
            },
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604800);
        assert_eq!(config.algorithm, "HS256");
        assert!(!config.introspection_enabled);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14)
            .with_introspection(true);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1209600);
        assert!(config.introspection_enabled);
        assert!(!config.is_using_default_secret());
    }
}
