//! Service- and application-level error types and their HTTP mapping.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed to execute the operation.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload failed field validation.
    #[error("validation failed")]
    UnprocessableEntity(ValidationErrors),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::UnprocessableEntity(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::Internal(source.to_string()),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, details) = match &self {
            AppError::UnprocessableEntity(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(errors).ok(),
            ),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, None),
            AppError::Internal(cause) => {
                // The cause stays in the logs; clients only see a generic body.
                error!(%cause, "request failed on a storage fault");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
            details,
        });

        (status, payload).into_response()
    }
}
