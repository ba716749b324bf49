use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::{ServerError, ServerResult};

pub mod compare;
pub mod health;

/// API information endpoint.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "clausediff-server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": {
            "compare": "POST /api/v1/compare",
            "health": "GET /health",
            "info": "GET /api/v1/info",
        }
    })))
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
