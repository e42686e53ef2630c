//! Error types and API error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use super::http::status_label;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code and per-violation messages
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable summary message
/// - One entry in `errors` per individual problem found
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Individual problems (one per violated parameter or failing record)
    pub errors: Vec<String>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            errors: Vec::new(),
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Append one problem to the error list
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.errors.push(error.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error from the collected violations
    ///
    /// The message joins every violation so a single-line reader still sees all of them.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: errors.join("; "),
            errors,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        Self::with_message(ErrorCode::InvalidRequest, msg.clone()).with_error(msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Error body returned by every failing endpoint
///
/// ```json
/// {
///   "status": "BAD_REQUEST",
///   "message": "Start date must have the pattern 'YYYY-MM-DD'",
///   "errors": ["Start date must have the pattern 'YYYY-MM-DD'"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Upper snake-case HTTP reason, e.g. `BAD_REQUEST`
    pub status: String,
    /// Summary message
    pub message: String,
    /// Individual problems
    pub errors: Vec<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        let errors = if err.errors.is_empty() {
            vec![err.code.message().to_string()]
        } else {
            err.errors.clone()
        };
        Self {
            status: status_label(err.http_status()),
            message: err.message.clone(),
            errors,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiError::from(&self);

        match self.code.category() {
            ErrorCategory::System => tracing::error!(
                code = %self.code,
                message = %self.message,
                errors = ?self.errors,
                "System error occurred"
            ),
            _ => tracing::warn!(
                code = %self.code,
                message = %self.message,
                errors = ?self.errors,
                "Request rejected"
            ),
        }

        (status, Json(body)).into_response()
    }
}
