//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
///
/// Every variant is local to one request; none are fatal to the process.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Name is not registered
    #[error("Name not found: {0}")]
    NotFound(String),

    /// Request body could not be read
    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    /// Request body is not a valid state change
    #[error("Malformed request body: {0}")]
    Decode(String),

    /// State change names an action other than "create"
    #[error("Unsupported action {0:?}, expected \"create\"")]
    UnsupportedAction(String),

    /// Name is empty or too long
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

impl CacheError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Decode(_)
            | CacheError::UnsupportedAction(_)
            | CacheError::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Lookups report absence with a bare 404
        if let CacheError::NotFound(_) = self {
            return status.into_response();
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
