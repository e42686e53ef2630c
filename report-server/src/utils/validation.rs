//! Request parameter validation
//!
//! Query parameters arrive as raw strings. They are checked declaratively with
//! `validator`, then decoded exactly once into typed values (`ReportKind`,
//! `DateRange`) before the pipeline runs.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::ReportKind;
use validator::{Validate, ValidationErrors};

use crate::reporting::DateRange;
use crate::utils::time::parse_date;

/// `YYYY-MM-DD` shape; calendar validity is checked separately
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is a valid regex"));

/// Raw query of `GET /api/reservation/report`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReportQuery {
    #[serde(rename = "reportName")]
    #[validate(
        required(message = "Required String parameter 'reportName' is not present"),
        length(min = 1, message = "Report name is required")
    )]
    pub report_name: Option<String>,

    #[serde(rename = "startDate")]
    #[validate(regex(
        path = *DATE_PATTERN,
        message = "Start date must have the pattern 'YYYY-MM-DD'"
    ))]
    pub start_date: Option<String>,

    #[serde(rename = "endDate")]
    #[validate(regex(
        path = *DATE_PATTERN,
        message = "End date must have the pattern 'YYYY-MM-DD'"
    ))]
    pub end_date: Option<String>,
}

/// A validated, decoded report request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub range: DateRange,
}

impl ReportQuery {
    /// Validate every parameter and decode the request
    ///
    /// All violations are collected; the caller gets them in one error.
    pub fn into_request(self) -> Result<ReportRequest, AppError> {
        self.validate().map_err(|e| validation_error(&e))?;

        let mut errors = Vec::new();
        let start = parse_bound(self.start_date.as_deref(), "startDate", &mut errors);
        let end = parse_bound(self.end_date.as_deref(), "endDate", &mut errors);
        if !errors.is_empty() {
            let mut err = AppError::validation(errors);
            err.code = ErrorCode::InvalidDate;
            return Err(err);
        }

        let report_name = self.report_name.unwrap_or_default();
        Ok(ReportRequest {
            kind: ReportKind::from_name(&report_name),
            range: DateRange::new(start, end),
        })
    }
}

fn parse_bound(
    value: Option<&str>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<chrono::NaiveDate> {
    let value = value?;
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(format!("{field} is not a valid calendar date: {value}"));
            None
        }
    }
}

/// Flatten validator output into sorted, human-readable messages
///
/// The code narrows to `RequiredField` or `InvalidFormat` when every
/// violation is of that kind, and stays `ValidationFailed` when they mix.
fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut codes = Vec::new();
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field}: {}", e.code));
                (rule_code(&e.code), message)
            })
        })
        .map(|(code, message)| {
            codes.push(code);
            message
        })
        .collect();
    messages.sort();
    codes.dedup();

    let mut err = AppError::validation(messages);
    if let [code] = codes.as_slice() {
        err.code = *code;
    }
    err
}

fn rule_code(rule: &str) -> ErrorCode {
    match rule {
        "required" | "length" => ErrorCode::RequiredField,
        "regex" => ErrorCode::InvalidFormat,
        _ => ErrorCode::ValidationFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: Option<&str>, start: Option<&str>, end: Option<&str>) -> ReportQuery {
        ReportQuery {
            report_name: name.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_valid_request_decodes_kind_and_range() {
        let request = query(
            Some("customerReservationBasicReport"),
            Some("2020-01-01"),
            Some("2020-02-15"),
        )
        .into_request()
        .unwrap();

        assert_eq!(request.kind, ReportKind::Basic);
        assert_eq!(request.range.start, Some(parse_date("2020-01-01").unwrap()));
        assert_eq!(request.range.end, Some(parse_date("2020-02-15").unwrap()));
    }

    #[test]
    fn test_dates_are_optional() {
        let request = query(Some("CustomerReservationVipAdvancedReport"), None, None)
            .into_request()
            .unwrap();
        assert_eq!(request.kind, ReportKind::VipAdvanced);
        assert_eq!(request.range, DateRange::unbounded());
    }

    #[test]
    fn test_unknown_report_name_is_not_a_validation_error() {
        let request = query(Some("Whatever"), None, None).into_request().unwrap();
        assert_eq!(request.kind, ReportKind::Unknown("Whatever".to_string()));
    }

    #[test]
    fn test_missing_report_name() {
        let err = query(None, None, None).into_request().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(
            err.errors,
            vec!["Required String parameter 'reportName' is not present"]
        );
        assert!(err.message.contains("'reportName' is not present"));
    }

    #[test]
    fn test_empty_report_name() {
        let err = query(Some(""), None, None).into_request().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.errors, vec!["Report name is required"]);
    }

    #[test]
    fn test_wrong_date_pattern() {
        let err = query(Some("CustomerReservationBasicReport"), Some("20201106"), None)
            .into_request()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(
            err.errors,
            vec!["Start date must have the pattern 'YYYY-MM-DD'"]
        );
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_all_violations_are_collected() {
        let err = query(None, Some("2020/01/01"), Some("tomorrow"))
            .into_request()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.errors,
            vec![
                "End date must have the pattern 'YYYY-MM-DD'",
                "Required String parameter 'reportName' is not present",
                "Start date must have the pattern 'YYYY-MM-DD'",
            ]
        );
    }

    #[test]
    fn test_pattern_ok_but_not_a_calendar_date() {
        let err = query(
            Some("CustomerReservationBasicReport"),
            Some("2020-02-30"),
            Some("2020-13-01"),
        )
        .into_request()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDate);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(
            err.errors,
            vec![
                "startDate is not a valid calendar date: 2020-02-30",
                "endDate is not a valid calendar date: 2020-13-01",
            ]
        );
    }
}
