//! Compact token encoding and decoding.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::ClaimSet;
use crate::errors::{ConfigError, DecodeError, TokenError};

use super::config::TokenServiceConfig;

/// Algorithms accepted for token signing
pub const ALLOWED_ALGORITHMS: &[&str] =
    &["HS256", "HS384", "HS512", "RS256", "RS384", "RS512"];

/// Serializes claim mappings into signed compact strings and back
///
/// The codec owns key material and the signature check only; claim
/// semantics (expiry, type) belong to the validator.
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl TokenCodec {
    /// Builds a codec from configuration
    ///
    /// Fails at setup for algorithms outside the allow-list, for RS*
    /// without a verifying key, and for unparseable key material. A codec
    /// that constructed successfully never raises configuration errors at
    /// call time.
    pub fn new(config: &TokenServiceConfig) -> Result<Self, ConfigError> {
        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            "RS256" => Algorithm::RS256,
            "RS384" => Algorithm::RS384,
            "RS512" => Algorithm::RS512,
            other => {
                return Err(ConfigError::UnrecognizedAlgorithm {
                    algorithm: other.to_string(),
                })
            }
        };

        let (encoding_key, decoding_key) = if config.algorithm.starts_with("HS") {
            // Symmetric: one secret signs and verifies
            (
                EncodingKey::from_secret(config.signing_key.as_bytes()),
                DecodingKey::from_secret(config.signing_key.as_bytes()),
            )
        } else {
            let verifying_key =
                config
                    .verifying_key
                    .as_deref()
                    .ok_or_else(|| ConfigError::MissingVerifyingKey {
                        algorithm: config.algorithm.clone(),
                    })?;

            let encoding_key = EncodingKey::from_rsa_pem(config.signing_key.as_bytes())
                .map_err(|e| ConfigError::InvalidSigningKey {
                    message: e.to_string(),
                })?;
            let decoding_key = DecodingKey::from_rsa_pem(verifying_key.as_bytes()).map_err(
                |e| ConfigError::InvalidVerifyingKey {
                    message: e.to_string(),
                },
            )?;

            (encoding_key, decoding_key)
        };

        Ok(Self {
            algorithm,
            encoding_key,
            decoding_key,
        })
    }

    /// Signs a claim mapping into its compact form
    pub fn encode(&self, claims: &ClaimSet) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Decodes a compact token back into its claim mapping
    ///
    /// With `verify_signature` set, a signature mismatch fails the decode.
    /// Claim semantics are never interpreted here: expired or wrongly-typed
    /// tokens decode fine and fail later in the validator.
    pub fn decode(&self, token: &str, verify_signature: bool) -> Result<ClaimSet, DecodeError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        if !verify_signature {
            validation.insecure_disable_signature_validation();
        }

        let data = jsonwebtoken::decode::<ClaimSet>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => DecodeError::InvalidSignature,
                _ => DecodeError::Malformed,
            })?;

        Ok(data.claims)
    }
}
