//! In-memory revocation store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::errors::DomainResult;

use super::r#trait::RevocationStore;

/// Process-local denylist backed by a hash map
///
/// Suitable for single-instance deployments and tests. Expired entries are
/// treated as absent on lookup and dropped by `prune_expired`.
#[derive(Debug, Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRevocationStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently held, including expired ones not yet
    /// pruned
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        // Keeps the first expiry on repeated adds
        entries.entry(jti.to_string()).or_insert(expires_at);
        Ok(())
    }

    async fn contains(&self, jti: &str) -> DomainResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(jti)
            .map_or(false, |expires_at| *expires_at > Utc::now()))
    }

    async fn prune_expired(&self) -> DomainResult<usize> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        let now = Utc::now();
        entries.retain(|_, expires_at| *expires_at > now);
        Ok(before - entries.len())
    }
}
