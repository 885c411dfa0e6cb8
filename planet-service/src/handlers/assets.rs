use crate::startup::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use service_core::error::AppError;

/// Serve the landing page asset unchanged.
pub async fn landing_page(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let path = &state.config.assets.landing_page;
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::AssetError(anyhow::anyhow!("failed to read {}: {}", path, e)))?;
    Ok(Html(contents))
}

/// Serve the locally stored API description as parsed JSON.
pub async fn api_docs(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let path = &state.config.assets.api_docs;
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::AssetError(anyhow::anyhow!("failed to read {}: {}", path, e)))?;

    let document: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| AppError::AssetError(anyhow::anyhow!("failed to parse {}: {}", path, e)))?;

    Ok(Json(document))
}
