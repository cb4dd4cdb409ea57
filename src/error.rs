//! Redirect handler errors and their HTTP translation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::StorageError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Failures surfaced by the redirect handler.
///
/// An expired link is not an error; it is returned as a normal `410` response.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The request path did not contain a short code.
    #[error("Invalid input: valid URL code is required")]
    InvalidInput,

    /// Reading the record from the object store failed.
    #[error("Error fetching URL data for '{key}': {source}")]
    StorageFailure {
        key: String,
        #[source]
        source: StorageError,
    },

    /// The stored bytes are not a valid URL record.
    #[error("Error deserializing URL data for '{key}': {source}")]
    DeserializationFailure {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RedirectError {
    /// HTTP status a host should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::StorageFailure { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            Self::StorageFailure { .. } => StatusCode::BAD_GATEWAY,
            Self::DeserializationFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::StorageFailure { source, .. } if source.is_not_found() => "not_found",
            Self::StorageFailure { .. } => "storage_error",
            Self::DeserializationFailure { .. } => "invalid_record",
        }
    }
}

impl IntoResponse for RedirectError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Storage and record details stay in the logs.
        let message = match &self {
            Self::InvalidInput => self.to_string(),
            Self::StorageFailure { source, .. } if source.is_not_found() => {
                "Short link not found".to_string()
            }
            Self::StorageFailure { .. } => "Short link storage is unavailable".to_string(),
            Self::DeserializationFailure { .. } => "Short link record is invalid".to_string(),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
