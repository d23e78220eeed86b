//! Principal directory trait defining the user-lookup capability.

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::DomainResult;

/// Principal lookup and password verification, owned by the excluded
/// user-management component
///
/// `find_active_user` accepts a username or an email address and matches
/// either case-insensitively. Inactive accounts are reported as absent, so
/// callers never learn whether an identifier exists but is disabled.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync {
    /// Finds an active principal by username or email
    async fn find_active_user(&self, identifier: &str) -> DomainResult<Option<Principal>>;

    /// Verifies a candidate password for a principal
    async fn verify_password(&self, principal: &Principal, password: &str)
        -> DomainResult<bool>;
}
