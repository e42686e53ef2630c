//! Shared types for the reservation reporting service
//!
//! Domain models (reservations, guests, customer reports) and the unified
//! error system used by the HTTP server.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    AdvancedReport, BasicReport, CustomerStatistic, Guest, Report, ReportKind, Reservation,
    VipAdvancedReport,
};
