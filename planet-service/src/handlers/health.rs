use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Fixed payload, no dependency checks.
pub async fn live() -> impl IntoResponse {
    Json(json!({ "status": "live" }))
}

/// Readiness probe. Fixed payload; the document-store connection is not
/// consulted, so this can report ready while the store is down.
pub async fn ready() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}

/// Operational diagnostics: host identity and environment label.
pub async fn os_info(State(state): State<AppState>) -> impl IntoResponse {
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    Json(json!({
        "os": host,
        "env": state.config.runtime.environment,
    }))
}
