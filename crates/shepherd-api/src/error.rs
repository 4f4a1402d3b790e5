use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<shepherd_storage::error::StorageError> for ApiError {
    fn from(e: shepherd_storage::error::StorageError) -> Self {
        match e {
            shepherd_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<shepherd_search::error::SearchError> for ApiError {
    fn from(e: shepherd_search::error::SearchError) -> Self {
        match e {
            shepherd_search::error::SearchError::QueryParse(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<shepherd_core::error::CoreError> for ApiError {
    fn from(e: shepherd_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<shepherd_auth::error::AuthError> for ApiError {
    fn from(e: shepherd_auth::error::AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<tantivy::TantivyError> for ApiError {
    fn from(e: tantivy::TantivyError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
