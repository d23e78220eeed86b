//! Repository interfaces and in-process implementations.

pub mod denylist;
pub mod principal;

pub use denylist::{InMemoryRevocationStore, RevocationStore};
pub use principal::PrincipalDirectory;
