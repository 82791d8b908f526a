use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;

/// Liveness plus a store round-trip.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.catalog.count().await {
        Ok(total) => (
            StatusCode::OK,
            Json(json!({"status": "ok", "total_questions": total})),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unavailable"})),
        ),
    }
}
