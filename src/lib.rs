//! Bit Cacher - A network-accessible existence cache
//!
//! Clients register names over HTTP and later ask whether they are present.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::NameCache;
pub use config::Config;
pub use tasks::spawn_sweep_task;
