//! Name Entry Module
//!
//! Defines the per-name record kept by the cache.

use std::time::{SystemTime, UNIX_EPOCH};

// == Name Entry ==
/// Record stored for each registered name.
///
/// The presence of the record is the presence marker; `created_at` exists so
/// that an [`ExpiryPolicy`](crate::cache::ExpiryPolicy) can age entries out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    /// Registration timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl NameEntry {
    // == Constructor ==
    /// Creates an entry with an explicit registration timestamp.
    pub fn created_at(created_at: u64) -> Self {
        Self { created_at }
    }

    // == Age ==
    /// Milliseconds elapsed between registration and `now_ms`.
    ///
    /// Saturates at zero if the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
