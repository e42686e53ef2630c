//! Reservation API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::models::Report;

use crate::core::ServerState;
use crate::utils::validation::ReportQuery;
use crate::utils::{AppError, AppResult};

/// GET /api/reservation/report?reportName=&startDate=&endDate=
///
/// Returns one row per customer with reservations in the (inclusive) date
/// range, sorted by name. An unrecognised `reportName` returns `[]`.
pub async fn get_customer_report(
    State(state): State<ServerState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Report>>> {
    let Query(query) = query.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let request = query.into_request()?;

    tracing::debug!(
        report = %request.kind,
        start = ?request.range.start,
        end = ?request.range.end,
        "Building customer reservation report"
    );

    let reports = state
        .reports
        .customer_report(&request.kind, &request.range)
        .await?;

    Ok(Json(reports))
}
