//! Configuration for the token service

use chrono::Duration;

use kanbu_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing algorithm name, checked against the allow-list at setup
    pub algorithm: String,
    /// Shared secret for HS* signing, or the PEM private key for RS*
    pub signing_key: String,
    /// PEM public key for RS* verification (ignored for HS* algorithms)
    pub verifying_key: Option<String>,
    /// Access token expiry in seconds
    pub access_token_expiry: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,
    /// Whether `verify` may be used for token introspection
    pub introspection_enabled: bool,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: "HS256".to_string(),
            signing_key: "development-secret-please-change-in-production".to_string(),
            verifying_key: None,
            access_token_expiry: 15 * 60,
            refresh_token_expiry: 7 * 24 * 60 * 60,
            introspection_enabled: false,
        }
    }
}

impl TokenServiceConfig {
    /// Access token lifetime as a duration
    pub fn access_lifetime(&self) -> Duration {
        Duration::seconds(self.access_token_expiry)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_lifetime(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry)
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            algorithm: jwt.algorithm.clone(),
            signing_key: jwt.signing_key.clone(),
            verifying_key: jwt.verifying_key.clone(),
            access_token_expiry: jwt.access_token_expiry,
            refresh_token_expiry: jwt.refresh_token_expiry,
            introspection_enabled: jwt.introspection_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.access_lifetime(), Duration::minutes(15));
        assert_eq!(config.refresh_lifetime(), Duration::days(7));
        assert!(!config.introspection_enabled);
    }

    #[test]
    fn test_from_shared_jwt_config() {
        let jwt = JwtConfig::new("my-secret")
            .with_access_expiry_minutes(5)
            .with_refresh_expiry_days(7)
            .with_introspection(true);

        let config = TokenServiceConfig::from(&jwt);

        assert_eq!(config.signing_key, "my-secret");
        assert_eq!(config.access_token_expiry, 300);
        assert_eq!(config.refresh_token_expiry, 604800);
        assert!(config.introspection_enabled);
    }
}
