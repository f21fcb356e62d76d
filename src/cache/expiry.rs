//! Expiry Policy Module
//!
//! Pluggable predicate deciding when a registered name stops counting as present.

use std::fmt::Debug;
use std::time::Duration;

use crate::cache::NameEntry;

// == Expiry Policy ==
/// Decides whether an entry has aged out.
///
/// Consulted lazily on every lookup and by the background sweep. Swapping the
/// policy changes expiry behavior without touching the cache itself.
pub trait ExpiryPolicy: Send + Sync + Debug {
    /// Returns true if `entry` should be treated as absent at `now_ms`.
    fn is_expired(&self, entry: &NameEntry, now_ms: u64) -> bool;
}

// == Never Expire ==
/// Entries live until process exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverExpire;

impl ExpiryPolicy for NeverExpire {
    fn is_expired(&self, _entry: &NameEntry, _now_ms: u64) -> bool {
        false
    }
}

// == TTL Expiry ==
/// Entries expire a fixed time after registration.
#[derive(Debug, Clone, Copy)]
pub struct TtlExpiry {
    ttl_ms: u64,
}

impl TtlExpiry {
    /// Creates a TTL policy.
    ///
    /// TTLs beyond `u64::MAX` milliseconds saturate, so they never expire.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Creates a TTL policy from a number of seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl ExpiryPolicy for TtlExpiry {
    /// Boundary condition: an entry is expired once `now >= created_at + ttl`.
    fn is_expired(&self, entry: &NameEntry, now_ms: u64) -> bool {
        entry.age_ms(now_ms) >= self.ttl_ms
    }
}
