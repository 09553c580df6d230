//! Structured error responses shared by all HTTP handlers.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses, providing consistent information to
/// clients:
/// - `status`: the HTTP status code
/// - `error`: the status reason phrase (e.g. "Not Found")
/// - `message`: a human-readable description of what went wrong
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 404,
///   "error": "Not Found",
///   "message": "Product with id '42' was not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Status reason phrase for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {:?}", e);
                (e.status(), e.body_text())
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::UnsupportedMediaType(msg) => {
                tracing::info!("Unsupported media type: {}", msg);
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorResponse {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
