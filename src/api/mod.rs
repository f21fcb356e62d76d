//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /api/1/get/:name` - 200 `{}` if the name is registered, 404 otherwise
//! - `POST /api/1/change` - Register a name with `{"action":"create","name":...}`
//! - `GET /api/1/stats` - Cache counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
