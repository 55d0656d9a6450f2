//! Service banner, liveness, and the JSON fallback.

use axum::{Json, http::Uri};
use serde_json::{Value, json};

use crate::errors::AppError;

/// Root banner listing the API surface.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Yatra tourist-safety backend is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "endpoints": ["/health", "/api/tourists", "/api/alerts", "/api/restricted"],
    }))
}

/// Liveness flag. Never inspects data state.
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// JSON 404 for unmatched routes.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {uri} not found"))
}
