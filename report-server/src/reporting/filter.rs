//! Scheduled-date range filter
//!
//! | start | end | kept when |
//! |-------|-----|-----------|
//! | Some | Some | start <= date <= end |
//! | Some | None | date >= start |
//! | None | Some | date <= end |
//! | None | None | always |

use chrono::NaiveDate;
use shared::models::Reservation;

use super::error::ReportError;
use crate::utils::time::parse_date;

/// Inclusive date bounds; a missing bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// No bounds: every date is kept
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Keep the reservations scheduled inside `range`, in input order
///
/// Every record's date is parsed, even when the range is unbounded, so a
/// corrupt record fails the whole request instead of being skipped.
pub fn filter_by_scheduled_date(
    reservations: Vec<Reservation>,
    range: &DateRange,
) -> Result<Vec<Reservation>, ReportError> {
    let total = reservations.len();
    let mut kept = Vec::with_capacity(total);

    for reservation in reservations {
        let date = scheduled_date(&reservation)?;
        if range.contains(date) {
            kept.push(reservation);
        }
    }

    tracing::debug!(total, kept = kept.len(), ?range, "Filtered reservations by date");
    Ok(kept)
}

fn scheduled_date(reservation: &Reservation) -> Result<NaiveDate, ReportError> {
    parse_date(&reservation.scheduled_date).map_err(|source| ReportError::InvalidRecordDate {
        reservation_id: reservation.id.clone(),
        value: reservation.scheduled_date.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Guest;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn reservation(id: &str, scheduled_date: &str) -> Reservation {
        Reservation {
            id: id.to_string(),
            party_size: 2,
            scheduled_date: scheduled_date.to_string(),
            total_spend: Decimal::new(1000, 2),
            guest: Guest {
                id: "g-1".to_string(),
                name: "Alice".to_string(),
            },
        }
    }

    fn dataset() -> Vec<Reservation> {
        vec![
            reservation("r-1", "2020-01-01"),
            reservation("r-2", "2020-02-01"),
            reservation("r-3", "2020-03-01"),
            reservation("r-4", "2020-01-15"),
        ]
    }

    fn ids(reservations: &[Reservation]) -> Vec<&str> {
        reservations.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_both_bounds_inclusive() {
        let range = DateRange::new(Some(date("2020-01-15")), Some(date("2020-02-01")));
        let kept = filter_by_scheduled_date(dataset(), &range).unwrap();
        assert_eq!(ids(&kept), vec!["r-2", "r-4"]);
    }

    #[test]
    fn test_start_only() {
        let range = DateRange::new(Some(date("2020-02-01")), None);
        let kept = filter_by_scheduled_date(dataset(), &range).unwrap();
        assert_eq!(ids(&kept), vec!["r-2", "r-3"]);
    }

    #[test]
    fn test_end_only() {
        let range = DateRange::new(None, Some(date("2020-01-15")));
        let kept = filter_by_scheduled_date(dataset(), &range).unwrap();
        assert_eq!(ids(&kept), vec!["r-1", "r-4"]);
    }

    #[test]
    fn test_unbounded_keeps_everything_in_order() {
        let kept = filter_by_scheduled_date(dataset(), &DateRange::unbounded()).unwrap();
        assert_eq!(ids(&kept), vec!["r-1", "r-2", "r-3", "r-4"]);
    }

    #[test]
    fn test_inverted_range_keeps_nothing() {
        let range = DateRange::new(Some(date("2020-03-01")), Some(date("2020-01-01")));
        let kept = filter_by_scheduled_date(dataset(), &range).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(Some(date("2020-03-01")), Some(date("2020-03-01")));
        let kept = filter_by_scheduled_date(dataset(), &range).unwrap();
        assert_eq!(ids(&kept), vec!["r-3"]);
    }

    #[test]
    fn test_malformed_record_date_fails_even_without_bounds() {
        let mut reservations = dataset();
        reservations.push(reservation("r-bad", "01/02/2020"));

        let err = filter_by_scheduled_date(reservations, &DateRange::unbounded()).unwrap_err();
        match err {
            ReportError::InvalidRecordDate {
                reservation_id,
                value,
                ..
            } => {
                assert_eq!(reservation_id, "r-bad");
                assert_eq!(value, "01/02/2020");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_contains_matches_predicate() {
        let range = DateRange::new(Some(date("2020-01-10")), Some(date("2020-01-20")));
        assert!(!range.contains(date("2020-01-09")));
        assert!(range.contains(date("2020-01-10")));
        assert!(range.contains(date("2020-01-20")));
        assert!(!range.contains(date("2020-01-21")));
    }
}
