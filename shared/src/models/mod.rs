//! Data models
//!
//! Reservation input records and the customer report shapes returned by the API.

pub mod report;
pub mod reservation;

// Re-exports
pub use report::*;
pub use reservation::*;
