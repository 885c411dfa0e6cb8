use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Asset error: {0}")]
    AssetError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct MessageResponse {
            message: String,
        }

        // Client-facing bodies never carry internal failure detail; the full
        // error is logged here for the 500 family before it is discarded.
        match self {
            AppError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: err.to_string(),
                }),
            )
                .into_response(),
            AppError::BadRequest(err) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: err.to_string(),
                }),
            )
                .into_response(),
            AppError::AssetError(err) => {
                tracing::error!("Asset error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading file").into_response()
            }
            AppError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                internal_server_error()
            }
            AppError::InternalError(err) => {
                tracing::error!("Internal error: {:#}", err);
                internal_server_error()
            }
            AppError::ConfigError(err) => {
                tracing::error!("Configuration error: {:#}", err);
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    #[derive(Serialize)]
    struct ErrorResponse {
        error: String,
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        serde_json::from_slice(&bytes).expect("body is not JSON")
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let response = AppError::NotFound(anyhow::anyhow!("Planet not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Planet not found");
    }

    #[tokio::test]
    async fn database_error_is_opaque() {
        let response =
            AppError::DatabaseError(anyhow::anyhow!("connection refused: 10.0.0.3:27017"))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal Server Error");
        assert!(
            !body.to_string().contains("connection refused"),
            "internal detail leaked into the response body"
        );
    }

    #[tokio::test]
    async fn asset_error_is_plain_text() {
        let response = AppError::AssetError(anyhow::anyhow!("no such file")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        assert_eq!(&bytes[..], b"Error reading file");
    }
}
