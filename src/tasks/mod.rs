//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: removes expired names when a TTL is configured

mod sweep;

pub use sweep::spawn_sweep_task;
