//! # Infrastructure Layer
//!
//! Concrete implementations of the core store interfaces for the Kanbu
//! authentication services.
//!
//! - **Cache**: Redis client with connection retry
//! - **Denylist**: Redis-backed revocation store with native key expiry

pub mod cache;
pub mod denylist;

use kanbu_shared::CacheConfig;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Load cache configuration from the environment
///
/// Reads a `.env` file when present, then `REDIS_*` variables.
pub fn load_cache_config() -> CacheConfig {
    dotenvy::dotenv().ok();
    CacheConfig::from_env()
}
