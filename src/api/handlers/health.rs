/*
 * Responsibility
 * - GET /health (liveness/readiness probe 用)
 * - store に接続できれば healthy、できなければ 503
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.connect().await {
        // The connection is dropped (and closed) right here.
        Ok(_conn) => (StatusCode::OK, Json(json!({"status": "healthy"}))),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unhealthy"})),
        ),
    }
}
