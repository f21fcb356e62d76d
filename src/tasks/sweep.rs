//! Expiry Sweep Task
//!
//! Background task that periodically removes expired names.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::NameCache;

/// Spawns a background task that periodically sweeps expired names.
///
/// Lookups already treat expired names as absent; the sweep only reclaims
/// their memory. The first sweep runs one interval after spawning.
///
/// # Arguments
/// * `cache` - shared reference to the cache
/// * `interval` - time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_sweep_task(cache: Arc<NameCache>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;
            if removed > 0 {
                info!("Expiry sweep: removed {} expired names", removed);
            } else {
                debug!("Expiry sweep: no expired names found");
            }
        }
    })
}
