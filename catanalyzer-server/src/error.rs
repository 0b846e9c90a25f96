//! API error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catanalyzer_core::BoardError;
use serde_json::json;

/// Errors returned by API handlers, rendered as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Analysis requested before every tile is assigned
    #[error("board is incomplete: {0} tiles still need a resource or number")]
    Incomplete(usize),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Board(_) => StatusCode::BAD_REQUEST,
            ApiError::Incomplete(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, "request rejected: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
