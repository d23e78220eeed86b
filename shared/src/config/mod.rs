//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing, token lifetimes and introspection gating
//! - `cache` - Redis connection configuration for backing stores

pub mod auth;
pub mod cache;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use cache::CacheConfig;
