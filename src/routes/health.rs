//! Liveness health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Public liveness check.
///
/// Always succeeds regardless of auth header or upstream availability;
/// does not check dependencies.
pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "ts": chrono::Utc::now().to_rfc3339(),
    }))
}
