//! Revocation store trait defining the denylist interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainResult;

/// Durable set-membership test for denylisted token identifiers
///
/// Only refresh tokens are ever denylisted; access tokens rely on their
/// short expiry alone. Implementations must provide read-after-write
/// consistency for a single `jti`: a `contains` call that starts after a
/// completed `add` for the same identifier observes membership.
///
/// Only the token service writes to this store; the validator only reads.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Records `jti` as revoked until `expires_at`
    ///
    /// Idempotent: adding an identifier that is already present has no
    /// additional effect. An entry may be pruned once `expires_at` passes;
    /// a pruned entry behaves exactly like one that was never added, which
    /// is safe because the token's own expiry is the outer bound.
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> DomainResult<()>;

    /// Checks whether `jti` is currently denylisted
    async fn contains(&self, jti: &str) -> DomainResult<bool>;

    /// Removes entries whose expiry has passed
    ///
    /// Returns how many entries were dropped. Stores that expire entries
    /// natively may report zero.
    async fn prune_expired(&self) -> DomainResult<usize>;
}
