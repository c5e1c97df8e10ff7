//! API error handling.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::task::{domain::ParseSortError, services::TaskServiceError};

const STORAGE_UNAVAILABLE_MESSAGE: &str = "task storage is temporarily unavailable";

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable failure name, e.g. `TitleTooShort`.
    pub kind: String,
    /// Offending input field, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable explanation.
    pub message: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(kind: impl Into<String>, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            field: field.map(str::to_owned),
            message: message.into(),
        }
    }
}

/// Error response carrying a status code and body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(kind: &str, field: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiError::new(kind, field, message))
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskServiceError> for ApiErrorResponse {
    fn from(error: TaskServiceError) -> Self {
        match &error {
            // Store details stay in the logs.
            TaskServiceError::StorageUnavailable(source) => {
                tracing::error!(error = %source, "task storage unavailable");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new(error.kind(), None, STORAGE_UNAVAILABLE_MESSAGE),
                )
            }
            TaskServiceError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new(error.kind(), None, error.to_string()),
            ),
            TaskServiceError::Validation(_)
            | TaskServiceError::DuplicateTitle(_)
            | TaskServiceError::InvalidId { .. } => {
                Self::bad_request(error.kind(), error.field(), error.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("MalformedRequest", None, rejection.body_text())
    }
}

impl From<ParseSortError> for ApiErrorResponse {
    fn from(error: ParseSortError) -> Self {
        let field = match &error {
            ParseSortError::UnknownField(_) => "sort",
            ParseSortError::UnknownDirection(_) => "order",
        };
        Self::bad_request("InvalidSort", Some(field), error.to_string())
    }
}
