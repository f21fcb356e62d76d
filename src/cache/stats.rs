//! Cache Statistics Module
//!
//! Tracks lookup hits and misses, accepted creates and expired entries.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub lookups_hit: u64,
    /// Lookups for absent or expired names
    pub lookups_miss: u64,
    /// Accepted create calls, including repeats of a present name
    pub creates: u64,
    /// Entries removed by expiry sweeps
    pub expired: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups_hit + self.lookups_miss;
        if total == 0 {
            0.0
        } else {
            self.lookups_hit as f64 / total as f64
        }
    }
}

// == Stats Counters ==
/// Live counters shared by every request.
///
/// Atomic so that lookups can record hits while holding only the read lock.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    lookups_hit: AtomicU64,
    lookups_miss: AtomicU64,
    creates: AtomicU64,
    expired: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn record_lookup(&self, hit: bool) {
        let counter = if hit {
            &self.lookups_hit
        } else {
            &self.lookups_miss
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_create(&self) {
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_expired(&self, count: usize) {
        self.expired.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            lookups_hit: self.lookups_hit.load(Ordering::Relaxed),
            lookups_miss: self.lookups_miss.load(Ordering::Relaxed),
            creates: self.creates.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = StatsCounters::default().snapshot(0);
        assert_eq!(stats, CacheStats::default());
    }

    #[test]
    fn test_hit_rate_no_lookups() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let counters = StatsCounters::default();
        counters.record_lookup(true);
        counters.record_lookup(false);
        counters.record_lookup(true);
        counters.record_lookup(true);

        let stats = counters.snapshot(3);
        assert_eq!(stats.lookups_hit, 3);
        assert_eq!(stats.lookups_miss, 1);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_create_and_expired() {
        let counters = StatsCounters::default();
        counters.record_create();
        counters.record_create();
        counters.record_expired(5);

        let stats = counters.snapshot(42);
        assert_eq!(stats.creates, 2);
        assert_eq!(stats.expired, 5);
        assert_eq!(stats.total_entries, 42);
    }
}
