//! Unified error codes for the reporting service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Request parameter errors
//! - 9xxx: System errors (data source, internal)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request (undecodable query string, wrong types)
    InvalidRequest = 5,

    // ==================== 1xxx: Request parameters ====================
    /// Required parameter missing or empty
    RequiredField = 1001,
    /// Parameter does not match its expected pattern
    InvalidFormat = 1002,
    /// Parameter matches the date pattern but is not a calendar date
    InvalidDate = 1003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Reservation data source could not be read
    DataSourceUnavailable = 9101,
    /// Reservation data source is not a valid reservation array
    DataSourceMalformed = 9102,
    /// A stored reservation carries an unparsable scheduled date
    InvalidRecordDate = 9103,
    /// A customer's spend total exceeds the decimal range
    SpendOverflow = 9104,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::RequiredField => "Required parameter is missing",
            ErrorCode::InvalidFormat => "Parameter has an invalid format",
            ErrorCode::InvalidDate => "Parameter is not a valid calendar date",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DataSourceUnavailable => "Reservation data source is unavailable",
            ErrorCode::DataSourceMalformed => "Reservation data source is malformed",
            ErrorCode::InvalidRecordDate => "Reservation record has an invalid scheduled date",
            ErrorCode::SpendOverflow => "Customer spend total is out of range",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a numeric value does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            1001 => Ok(ErrorCode::RequiredField),
            1002 => Ok(ErrorCode::InvalidFormat),
            1003 => Ok(ErrorCode::InvalidDate),
            9001 => Ok(ErrorCode::InternalError),
            9101 => Ok(ErrorCode::DataSourceUnavailable),
            9102 => Ok(ErrorCode::DataSourceMalformed),
            9103 => Ok(ErrorCode::InvalidRecordDate),
            9104 => Ok(ErrorCode::SpendOverflow),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
