//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bytes::{Bytes, BytesMut};
use http_body_util::BodyExt;
use tracing::{debug, warn};

use crate::cache::{NameCache, MAX_BODY_SIZE};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    Action, HealthResponse, PresentResponse, StateChangeRequest, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache synchronizes itself; the state only shares ownership of it.
#[derive(Clone)]
pub struct AppState {
    /// Shared existence cache
    pub cache: Arc<NameCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: NameCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Installs the expiry policy described by the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(NameCache::with_policy(config.expiry_policy()))
    }
}

/// Reads at most `limit` bytes of `body`.
///
/// Frames past the limit are never polled, so an oversized body costs at
/// most one frame of buffering beyond `limit`.
pub async fn read_capped(mut body: Body, limit: usize) -> Result<Bytes> {
    let mut buf = BytesMut::new();

    while buf.len() < limit {
        match body.frame().await {
            Some(Ok(frame)) => {
                // Trailers carry no payload
                if let Ok(data) = frame.into_data() {
                    let take = data.len().min(limit - buf.len());
                    buf.extend_from_slice(&data[..take]);
                }
            }
            Some(Err(e)) => return Err(CacheError::BodyRead(e.to_string())),
            None => break,
        }
    }

    Ok(buf.freeze())
}

/// Handler for GET /api/1/get/:name
///
/// 200 with `{}` if the name is registered, bare 404 otherwise.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PresentResponse>> {
    if state.cache.exists(&name).await {
        Ok(Json(PresentResponse::default()))
    } else {
        debug!(%name, "lookup miss");
        Err(CacheError::NotFound(name))
    }
}

/// Handler for POST /api/1/change
///
/// Applies a `{"action": "create", "name": ...}` state change. The body is
/// truncated to [`MAX_BODY_SIZE`] bytes before decoding.
pub async fn change_handler(State(state): State<AppState>, body: Body) -> Result<StatusCode> {
    let bytes = match read_capped(body, MAX_BODY_SIZE).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "reading state change body failed");
            return Err(e);
        }
    };

    let req = match StateChangeRequest::from_slice(&bytes) {
        Ok(req) => req,
        Err(e) => {
            warn!(body = ?String::from_utf8_lossy(&bytes), error = %e, "undecodable state change");
            return Err(e);
        }
    };

    let action = match req.validate() {
        Ok(action) => action,
        Err(e) => {
            warn!(error = %e, "rejected state change");
            return Err(e);
        }
    };

    match action {
        Action::Create => {
            let created = state.cache.insert(req.name.as_str()).await;
            debug!(%action, name = %req.name, created, "state change applied");
        }
    }

    Ok(StatusCode::CREATED)
}

/// Handler for GET /api/1/stats
///
/// Returns current cache counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
