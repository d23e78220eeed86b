//! Unit tests for the in-memory revocation store.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::repositories::denylist::memory::InMemoryRevocationStore;
use crate::repositories::RevocationStore;

#[tokio::test]
async fn test_add_then_contains() {
    let store = InMemoryRevocationStore::new();

    store
        .add("a1b2c3", Utc::now() + Duration::days(7))
        .await
        .unwrap();

    assert!(store.contains("a1b2c3").await.unwrap());
    assert!(!store.contains("other").await.unwrap());
}

#[tokio::test]
async fn test_add_is_idempotent() {
    let store = InMemoryRevocationStore::new();
    let expires_at = Utc::now() + Duration::days(7);

    store.add("a1b2c3", expires_at).await.unwrap();
    store.add("a1b2c3", expires_at).await.unwrap();

    assert!(store.contains("a1b2c3").await.unwrap());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_repeated_add_keeps_first_expiry() {
    let store = InMemoryRevocationStore::new();

    store
        .add("a1b2c3", Utc::now() - Duration::seconds(1))
        .await
        .unwrap();
    // A later add with a live expiry must not resurrect the entry
    store
        .add("a1b2c3", Utc::now() + Duration::days(7))
        .await
        .unwrap();

    assert!(!store.contains("a1b2c3").await.unwrap());
}

#[tokio::test]
async fn test_expired_entry_behaves_as_never_added() {
    let store = InMemoryRevocationStore::new();

    store
        .add("a1b2c3", Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    assert!(!store.contains("a1b2c3").await.unwrap());
}

#[tokio::test]
async fn test_prune_expired() {
    let store = InMemoryRevocationStore::new();

    store
        .add("live", Utc::now() + Duration::days(7))
        .await
        .unwrap();
    store
        .add("stale", Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    let pruned = store.prune_expired().await.unwrap();

    assert_eq!(pruned, 1);
    assert_eq!(store.len().await, 1);
    assert!(store.contains("live").await.unwrap());
    assert!(!store.contains("stale").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_add_and_contains() {
    let store = Arc::new(InMemoryRevocationStore::new());
    let expires_at = Utc::now() + Duration::days(7);

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let jti = format!("jti-{}", i);
            store.add(&jti, expires_at).await.unwrap();
            // Read-after-write for the same identifier
            assert!(store.contains(&jti).await.unwrap());
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, 16);
}
