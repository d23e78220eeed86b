//! Redis-backed revocation store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use tracing::debug;

use kanbu_core::errors::{DomainError, DomainResult};
use kanbu_core::repositories::RevocationStore;

use crate::cache::RedisClient;

/// Key prefix for denylist entries
const KEY_PREFIX: &str = "denylist:jti:";

/// Revocation store keeping denylisted token identifiers in Redis
///
/// Entries carry a TTL equal to the remaining token lifetime, so Redis
/// prunes them once the token would have expired on its own. All callers
/// sharing one Redis instance observe read-after-write consistency for a
/// given `jti`.
pub struct RedisRevocationStore {
    redis_client: Arc<RedisClient>,
}

impl RedisRevocationStore {
    /// Creates a store backed by the given Redis client
    pub fn new(redis_client: Arc<RedisClient>) -> Self {
        Self { redis_client }
    }

    fn key(jti: &str) -> String {
        format!("{}{}", KEY_PREFIX, jti)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> DomainResult<()> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            // The token is already past its own expiry; an entry would be
            // pruned immediately
            return Ok(());
        }

        let key = Self::key(jti);
        let mut conn = self.redis_client.get_connection();

        // NX keeps the first entry, so repeated adds have no further effect
        let _: () = redis::cmd("SET")
            .arg(&key)
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(ttl as u64)
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to denylist token: {}", e),
            })?;

        debug!(%jti, ttl, "denylist entry stored");

        Ok(())
    }

    async fn contains(&self, jti: &str) -> DomainResult<bool> {
        let mut conn = self.redis_client.get_connection();

        let exists: bool = conn
            .exists(Self::key(jti))
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to check denylist: {}", e),
            })?;

        Ok(exists)
    }

    async fn prune_expired(&self) -> DomainResult<usize> {
        // Redis expires entries natively through key TTLs
        Ok(0)
    }
}
