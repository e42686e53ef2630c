//! 客户预订报表流水线
//!
//! Load → Filter → Aggregate → Shape → Sort, run from scratch on every request.
//! No state survives a call, so a [`ReportService`] can be shared freely across tasks.
//!
//! - [`loader`] - 读取预订数据文件
//! - [`filter`] - 按预订日期过滤
//! - [`aggregator`] - 按客户汇总
//! - [`shaper`] - 生成报表并排序

pub mod aggregator;
pub mod error;
pub mod filter;
pub mod loader;
pub mod shaper;

pub use aggregator::{CustomerStatistics, aggregate_by_customer};
pub use error::ReportError;
pub use filter::{DateRange, filter_by_scheduled_date};
pub use loader::ReservationLoader;
pub use shaper::{shape_reports, sort_by_name};

use shared::models::{Report, ReportKind, Reservation};

#[derive(Debug, Clone)]
pub struct ReportService {
    loader: ReservationLoader,
}

impl ReportService {
    pub fn new(loader: ReservationLoader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &ReservationLoader {
        &self.loader
    }

    /// All reservations in the data source
    pub async fn all_reservations(&self) -> Result<Vec<Reservation>, ReportError> {
        self.loader.load_all().await
    }

    /// Reservations scheduled inside `range`, in data source order
    pub async fn reservations_by_scheduled_date(
        &self,
        range: &DateRange,
    ) -> Result<Vec<Reservation>, ReportError> {
        let reservations = self.loader.load_all().await?;
        filter_by_scheduled_date(reservations, range)
    }

    /// Customer report of the requested kind, sorted by customer name
    pub async fn customer_report(
        &self,
        kind: &ReportKind,
        range: &DateRange,
    ) -> Result<Vec<Report>, ReportError> {
        let reservations = self.reservations_by_scheduled_date(range).await?;
        let stats = aggregate_by_customer(&reservations)?;

        let mut reports = shape_reports(stats, kind);
        sort_by_name(&mut reports);

        tracing::debug!(report = %kind, rows = reports.len(), "Built customer report");
        Ok(reports)
    }
}
