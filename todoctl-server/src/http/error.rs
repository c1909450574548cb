//! API error types with IntoResponse
//!
//! The two defined failures (404, 400) are bodyless on the wire.
//! Storage faults surface as a generic 500 with the detail logged
//! server-side, never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Requested id is absent (404, empty body)
    NotFound { id: i64 },

    /// Update body id disagrees with the path id (400, empty body)
    IdMismatch { path_id: i64, body_id: i64 },

    /// Storage failure (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            Self::IdMismatch { path_id, body_id } => {
                tracing::debug!(path_id, body_id, "rejected update with mismatched ids");
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::Store(e) => {
                // Log the actual error, return a generic message
                tracing::error!("storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
