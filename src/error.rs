//! Error types for the notes server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::notes::ExtractionError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Extraction(ExtractionError::UnsupportedFormat(file_name)) => {
                tracing::warn!(file_name = %file_name, "Rejected upload with unsupported format");
                (StatusCode::BAD_REQUEST, "Unsupported file format".to_string())
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process file".to_string(),
                )
            }
            AppError::Multipart(e) => {
                tracing::warn!("Multipart error: {}", e);
                (e.status(), "Invalid multipart upload".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        // Client errors keep the bare `{"error": ...}` shape
        let details = if status.is_server_error() && cfg!(debug_assertions) {
            Some(self.to_string())
        } else {
            None
        };

        (status, Json(ErrorResponse { error: message, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_format_body() {
        let error = AppError::from(ExtractionError::UnsupportedFormat("a.docx".into()));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Unsupported file format" })
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_is_server_error() {
        let error = AppError::from(ExtractionError::Pdf("broken xref".into()));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Failed to process file");
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = AppError::NotFound("Asset not found: x.png".into()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Asset not found: x.png" })
        );
    }
}
