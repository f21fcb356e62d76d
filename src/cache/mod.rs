//! Cache Module
//!
//! Provides the in-memory existence table with pluggable expiry.

mod entry;
mod expiry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, NameEntry};
pub use expiry::{ExpiryPolicy, NeverExpire, TtlExpiry};
pub use stats::CacheStats;
pub use store::NameCache;

// == Public Constants ==
/// Maximum allowed name length in bytes
pub const MAX_NAME_LENGTH: usize = 1024;

/// Bytes of a create request body read before the rest is discarded
pub const MAX_BODY_SIZE: usize = 1024;
