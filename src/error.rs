//! API error to HTTP mapping.
//!
//! Every failure surfaces as `{"error": <message>}` with the matching
//! status code. Handled errors are terminal for the request, never for
//! the process; unexpected conditions become a generic 500 with no
//! internal detail leaked.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracker_lib::TrackerError;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An API-level failure carrying the HTTP status and client message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Issue not found".to_string(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::IssueNotFound { .. } => Self::not_found(),
            TrackerError::Validation { .. } | TrackerError::InvalidParam { .. } => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "request failed");
        }
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
