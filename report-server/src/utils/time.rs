//! Calendar date helpers

use chrono::NaiveDate;

/// ISO 8601 calendar date, e.g. `2020-01-31`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
