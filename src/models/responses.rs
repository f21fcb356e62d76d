//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for a successful lookup (GET /api/1/get/:name)
///
/// Serializes to the empty object `{}`; the status code carries the answer.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PresentResponse {}

/// Response body for the stats endpoint (GET /api/1/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups that found the name
    pub lookups_hit: u64,
    /// Lookups that did not
    pub lookups_miss: u64,
    /// Accepted create requests
    pub creates: u64,
    /// Entries removed by expiry sweeps
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            lookups_hit: stats.lookups_hit,
            lookups_miss: stats.lookups_miss,
            creates: stats.creates,
            expired: stats.expired,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for rejected state changes
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_response_is_empty_object() {
        let json = serde_json::to_string(&PresentResponse::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            lookups_hit: 80,
            lookups_miss: 20,
            creates: 7,
            expired: 3,
            total_entries: 4,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.creates, 7);
        assert_eq!(resp.total_entries, 4);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }
}
