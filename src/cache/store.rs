//! Name Cache Module
//!
//! The shared existence table: a name is either registered or absent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::stats::StatsCounters;
use crate::cache::{current_timestamp_ms, CacheStats, ExpiryPolicy, NameEntry, NeverExpire};

// == Name Cache ==
/// Concurrency-safe set of registered names.
///
/// Lookups share a read lock; inserts and sweeps take the write lock for a
/// single map operation, so a cancelled caller either applied its insert in
/// full or not at all. Wrap in an `Arc` to share between request handlers.
#[derive(Debug)]
pub struct NameCache {
    /// Registered names
    entries: RwLock<HashMap<String, NameEntry>>,
    /// Decides when an entry stops counting as present
    policy: Arc<dyn ExpiryPolicy>,
    /// Lookup and mutation counters
    stats: StatsCounters,
}

impl NameCache {
    // == Constructor ==
    /// Creates an empty cache whose entries never expire.
    pub fn new() -> Self {
        Self::with_policy(Arc::new(NeverExpire))
    }

    /// Creates an empty cache governed by the given expiry policy.
    pub fn with_policy(policy: Arc<dyn ExpiryPolicy>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy,
            stats: StatsCounters::default(),
        }
    }

    // == Exists ==
    /// Returns true if `name` is registered and not expired.
    ///
    /// Expired entries read as absent but are left for the sweep to remove,
    /// so this never needs the write lock.
    pub async fn exists(&self, name: &str) -> bool {
        let now = current_timestamp_ms();
        let present = {
            let entries = self.entries.read().await;
            entries
                .get(name)
                .is_some_and(|entry| !self.policy.is_expired(entry, now))
        };

        self.stats.record_lookup(present);
        present
    }

    // == Insert ==
    /// Registers `name`.
    ///
    /// Idempotent: a live entry keeps its original timestamp, an expired one
    /// is replaced by a fresh entry. Returns true if the name was not
    /// previously present.
    ///
    /// Callers are expected to have rejected empty or oversized names.
    pub async fn insert(&self, name: impl Into<String>) -> bool {
        let name = name.into();
        debug_assert!(!name.is_empty(), "empty names must be rejected upstream");

        let now = current_timestamp_ms();
        let created = {
            let mut entries = self.entries.write().await;
            match entries.entry(name) {
                Entry::Occupied(mut slot) => {
                    if self.policy.is_expired(slot.get(), now) {
                        slot.insert(NameEntry::created_at(now));
                        true
                    } else {
                        false
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(NameEntry::created_at(now));
                    true
                }
            }
        };

        self.stats.record_create();
        created
    }

    // == Sweep Expired ==
    /// Removes every entry the policy reports as expired.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let removed = {
            let mut entries = self.entries.write().await;
            let before = entries.len();
            entries.retain(|_, entry| !self.policy.is_expired(entry, now));
            before - entries.len()
        };

        self.stats.record_expired(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        let total = self.len().await;
        self.stats.snapshot(total)
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlExpiry;
    use std::time::Duration;

    fn short_ttl_cache() -> NameCache {
        NameCache::with_policy(Arc::new(TtlExpiry::new(Duration::from_millis(100))))
    }

    #[tokio::test]
    async fn test_cache_new() {
        let cache = NameCache::new();
        assert_eq!(cache.len().await, 0);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_name_absent() {
        let cache = NameCache::new();
        assert!(!cache.exists("never-created").await);
    }

    #[tokio::test]
    async fn test_insert_then_exists() {
        let cache = NameCache::new();

        assert!(cache.insert("some-name").await);
        assert!(cache.exists("some-name").await);
        assert!(!cache.exists("other-name").await);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_idempotent() {
        let cache = NameCache::new();

        assert!(cache.insert("dup").await);
        assert!(!cache.insert("dup").await);

        assert!(cache.exists("dup").await);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let cache = NameCache::new();
        cache.insert("Name").await;

        assert!(cache.exists("Name").await);
        assert!(!cache.exists("name").await);
    }

    #[tokio::test]
    async fn test_never_expire_sweep_is_noop() {
        let cache = NameCache::new();
        cache.insert("a").await;
        cache.insert("b").await;

        assert_eq!(cache.sweep_expired().await, 0);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_ttl_lookup_reads_absent_after_expiry() {
        let cache = short_ttl_cache();
        cache.insert("short").await;
        assert!(cache.exists("short").await);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(!cache.exists("short").await);
        // Lazy check leaves the entry in place for the sweep
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let cache = short_ttl_cache();
        cache.insert("old").await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.insert("fresh").await;

        assert_eq!(cache.sweep_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.exists("fresh").await);
        assert!(!cache.exists("old").await);
    }

    #[tokio::test]
    async fn test_reinsert_revives_expired_entry() {
        let cache = short_ttl_cache();
        cache.insert("phoenix").await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!cache.exists("phoenix").await);

        assert!(cache.insert("phoenix").await);
        assert!(cache.exists("phoenix").await);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_stats_track_operations() {
        let cache = short_ttl_cache();
        cache.insert("k").await;
        cache.insert("k").await;
        cache.exists("k").await;
        cache.exists("missing").await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.sweep_expired().await;

        let stats = cache.stats().await;
        assert_eq!(stats.creates, 2);
        assert_eq!(stats.lookups_hit, 1);
        assert_eq!(stats.lookups_miss, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.total_entries, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_inserts_not_lost() {
        let cache = Arc::new(NameCache::new());
        let count = 200;

        let handles: Vec<_> = (0..count)
            .map(|i| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.insert(format!("name-{}", i)).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap());
        }

        assert_eq!(cache.len().await, count);
        for i in 0..count {
            assert!(cache.exists(&format!("name-{}", i)).await);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_name_single_entry() {
        let cache = Arc::new(NameCache::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.insert("shared").await })
            })
            .collect();

        let mut newly_created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                newly_created += 1;
            }
        }

        assert_eq!(newly_created, 1);
        assert_eq!(cache.len().await, 1);
    }
}
