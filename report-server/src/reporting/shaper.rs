//! Report shaping and ordering
//!
//! Maps each customer statistic 1:1 onto the requested report variant, then
//! orders the rows by customer name.

use shared::models::{
    AdvancedReport, BasicReport, CustomerStatistic, MAX_PARTY_SIZE, Report, ReportKind,
    VIP_CREDIT, VipAdvancedReport,
};

use super::aggregator::CustomerStatistics;

/// Build one report row per statistic; unknown kinds produce no rows
pub fn shape_reports(stats: CustomerStatistics, kind: &ReportKind) -> Vec<Report> {
    let shape: fn(CustomerStatistic) -> Report = match kind {
        ReportKind::Basic => |stat| Report::Basic(stat.into()),
        ReportKind::Advanced => |stat| Report::Advanced(advanced(stat.into())),
        ReportKind::VipAdvanced => |stat| {
            Report::VipAdvanced(VipAdvancedReport {
                advanced: advanced(stat.into()),
                vip_credit: VIP_CREDIT,
            })
        },
        ReportKind::Unknown(name) => {
            tracing::warn!(report_name = %name, "Unrecognised report name, returning no rows");
            return Vec::new();
        }
    };

    stats.into_values().map(shape).collect()
}

fn advanced(basic: BasicReport) -> AdvancedReport {
    AdvancedReport {
        basic,
        max_party_size: MAX_PARTY_SIZE,
    }
}

/// Stable ascending sort by customer name (plain string ordering)
pub fn sort_by_name(reports: &mut [Report]) {
    reports.sort_by(|a, b| a.name().cmp(b.name()));
}
