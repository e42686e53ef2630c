//! Per-customer aggregation
//!
//! Groups reservations by guest name. The first reservation of a guest opens
//! the entry; later ones bump the visit count and add their spend.

use std::collections::HashMap;

use shared::models::{CustomerStatistic, Reservation};

use super::error::ReportError;

/// Customer statistics keyed by guest name
pub type CustomerStatistics = HashMap<String, CustomerStatistic>;

/// Fails when a guest's spend total no longer fits in a `Decimal`
pub fn aggregate_by_customer(
    reservations: &[Reservation],
) -> Result<CustomerStatistics, ReportError> {
    let mut stats = CustomerStatistics::new();

    for reservation in reservations {
        let name = &reservation.guest.name;
        match stats.get_mut(name) {
            Some(stat) => stat.record_visit(reservation.total_spend).ok_or_else(|| {
                ReportError::SpendOverflow {
                    name: name.clone(),
                    reservation_id: reservation.id.clone(),
                }
            })?,
            None => {
                stats.insert(
                    name.clone(),
                    CustomerStatistic::first_visit(name.clone(), reservation.total_spend),
                );
            }
        }
    }

    tracing::debug!(
        reservations = reservations.len(),
        customers = stats.len(),
        "Aggregated customer statistics"
    );
    Ok(stats)
}
