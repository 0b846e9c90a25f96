//! Status endpoint

use axum::Json;
use serde_json::{json, Value};

/// Health check
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "engine": "rust",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
