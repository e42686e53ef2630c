//! Reservation Model (预订记录)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Guest who made a reservation
///
/// `name` is the aggregation key for customer reports; uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
}

/// A single booking record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Stored as `reservation_id`; `id` is accepted on input
    #[serde(rename = "reservation_id", alias = "id")]
    pub id: String,
    pub party_size: u32,
    /// Calendar date in `YYYY-MM-DD`, parsed when filtering
    pub scheduled_date: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_spend: Decimal,
    pub guest: Guest,
}
