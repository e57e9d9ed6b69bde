use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each error kind to an HTTP status and a JSON error body. Client
/// input errors carry a descriptive message; store failures are logged
/// with full detail and collapsed into a generic message so internal
/// error detail never reaches the caller.
#[derive(Debug)]
pub enum ApiError {
    /// Request body was empty (or an empty JSON object)
    EmptyBody,
    /// Request body parsed as JSON but was not an object
    NotAnObject,
    /// Request body was not syntactically valid JSON
    InvalidJson(serde_json::Error),
    /// Key not found in the store
    KeyNotFound(String),
    /// Store operation failed
    StoreError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::EmptyBody => (
                StatusCode::BAD_REQUEST,
                "Request body cannot be empty".to_string(),
            ),
            ApiError::NotAnObject => (
                StatusCode::BAD_REQUEST,
                "Request body must be a JSON object".to_string(),
            ),
            ApiError::InvalidJson(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", err),
            ),
            ApiError::KeyNotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("Item with key '{}' not found", key),
            ),
            ApiError::StoreError(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage backend error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err)
    }
}
