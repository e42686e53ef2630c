//! Unified error system for the reporting service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by range
//! - [`AppError`]: Error type with code, message and per-violation list
//! - [`ApiError`]: The JSON error body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Request parameter errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiError, AppError, ErrorCode};
//!
//! let err = AppError::validation(vec!["Report name is required".to_string()]);
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//!
//! let body = ApiError::from(&err);
//! assert_eq!(body.status, "BAD_REQUEST");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use http::status_label;
pub use types::{ApiError, AppError, AppResult};
