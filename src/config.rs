//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use crate::cache::{ExpiryPolicy, NeverExpire, TtlExpiry};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds before a registered name expires, 0 = never
    pub entry_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `ENTRY_TTL` - Entry lifetime in seconds, 0 disables expiry (default: 0)
    /// - `SWEEP_INTERVAL` - Expired entry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: env_or("SERVER_HOST", defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            entry_ttl: env_or("ENTRY_TTL", defaults.entry_ttl),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    /// True when entries age out and the sweep task should run.
    pub fn expiry_enabled(&self) -> bool {
        self.entry_ttl > 0
    }

    /// Builds the expiry policy described by `entry_ttl`.
    pub fn expiry_policy(&self) -> Arc<dyn ExpiryPolicy> {
        if self.expiry_enabled() {
            Arc::new(TtlExpiry::from_secs(self.entry_ttl))
        } else {
            Arc::new(NeverExpire)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 8080,
            entry_ttl: 0,
            sweep_interval: 60,
        }
    }
}

/// Reads and parses `key`, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
