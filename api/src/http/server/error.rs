use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use messenger_core::domain::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("storage unavailable")]
    ServiceUnavailable,

    #[error("internal server error")]
    InternalServerError,

    #[error("failed to start server: {0}")]
    Startup(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => {
                tracing::debug!(error = %err, "request failed");
                ApiError::NotFound
            }
            CoreError::ServiceUnavailable(_) => {
                tracing::error!(error = %err, "storage unavailable");
                ApiError::ServiceUnavailable
            }
            CoreError::DatabaseError { .. } => {
                tracing::error!(error = %err, "storage failure");
                ApiError::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError | ApiError::Startup(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
