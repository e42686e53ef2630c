//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 500 Internal Server Error (server-side data and runtime failures)
            Self::InternalError
            | Self::DataSourceUnavailable
            | Self::DataSourceMalformed
            | Self::InvalidRecordDate
            | Self::SpendOverflow => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (client input)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::InvalidFormat
            | Self::InvalidDate => StatusCode::BAD_REQUEST,
        }
    }
}

/// Upper snake-case reason constant for a status, e.g. `BAD_REQUEST`
pub fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| {
            reason
                .chars()
                .map(|c| match c {
                    ' ' | '-' => '_',
                    c => c.to_ascii_uppercase(),
                })
                .filter(|c| *c != '\'')
                .collect()
        })
        .unwrap_or_else(|| status.as_u16().to_string())
}
