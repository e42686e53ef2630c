//! Reporting pipeline errors

use shared::error::{AppError, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read reservation data source {path}: {source}")]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reservation data source {path} is malformed: {source}")]
    DataSourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reservation {reservation_id} has invalid scheduled_date '{value}': {source}")]
    InvalidRecordDate {
        reservation_id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("spend total of {name} overflows at reservation {reservation_id}")]
    SpendOverflow {
        name: String,
        reservation_id: String,
    },
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DataSourceUnavailable { .. } => ErrorCode::DataSourceUnavailable,
            Self::DataSourceMalformed { .. } => ErrorCode::DataSourceMalformed,
            Self::InvalidRecordDate { .. } => ErrorCode::InvalidRecordDate,
            Self::SpendOverflow { .. } => ErrorCode::SpendOverflow,
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        AppError::new(err.code()).with_error(err.to_string())
    }
}
