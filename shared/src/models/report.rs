//! Customer Reservation Report Models (客户预订报表)
//!
//! Three report shapes share one base record:
//!
//! | Kind | Fields |
//! |------|--------|
//! | Basic | name, num_of_visit, total_spend |
//! | Advanced | Basic + max_party_size |
//! | VipAdvanced | Advanced + vip_credit |
//!
//! Each shape embeds the previous one with `#[serde(flatten)]`, so the JSON
//! stays a flat object per variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report name literal for [`ReportKind::Basic`]
pub const BASIC_REPORT_NAME: &str = "CustomerReservationBasicReport";
/// Report name literal for [`ReportKind::Advanced`]
pub const ADVANCED_REPORT_NAME: &str = "CustomerReservationAdvancedReport";
/// Report name literal for [`ReportKind::VipAdvanced`]
pub const VIP_ADVANCED_REPORT_NAME: &str = "CustomerReservationVipAdvancedReport";

/// Fixed `max_party_size` carried by advanced reports (not derived from data)
pub const MAX_PARTY_SIZE: u32 = 100;
/// Fixed `vip_credit` carried by VIP reports (not derived from data)
pub const VIP_CREDIT: u32 = 200;

/// Per-guest accumulator built while scanning filtered reservations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerStatistic {
    pub name: String,
    pub visit_count: u32,
    pub total_spend: Decimal,
}

impl CustomerStatistic {
    /// First visit of a guest
    pub fn first_visit(name: impl Into<String>, spend: Decimal) -> Self {
        Self {
            name: name.into(),
            visit_count: 1,
            total_spend: spend,
        }
    }

    /// Count one more visit and add its spend (exact decimal addition)
    ///
    /// Returns `None` and leaves the statistic untouched when either total
    /// would overflow.
    #[must_use]
    pub fn record_visit(&mut self, spend: Decimal) -> Option<()> {
        let total_spend = self.total_spend.checked_add(spend)?;
        let visit_count = self.visit_count.checked_add(1)?;
        self.total_spend = total_spend;
        self.visit_count = visit_count;
        Some(())
    }
}

/// Requested report shape, decoded once from the `reportName` parameter
///
/// Matching is case-insensitive against the three literal names. Any other
/// name is kept as [`ReportKind::Unknown`] so callers can see it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Basic,
    Advanced,
    VipAdvanced,
    Unknown(String),
}

impl ReportKind {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(BASIC_REPORT_NAME) {
            Self::Basic
        } else if name.eq_ignore_ascii_case(ADVANCED_REPORT_NAME) {
            Self::Advanced
        } else if name.eq_ignore_ascii_case(VIP_ADVANCED_REPORT_NAME) {
            Self::VipAdvanced
        } else {
            Self::Unknown(name.to_string())
        }
    }

    /// Canonical report name (or the raw name for unknown kinds)
    pub fn name(&self) -> &str {
        match self {
            Self::Basic => BASIC_REPORT_NAME,
            Self::Advanced => ADVANCED_REPORT_NAME,
            Self::VipAdvanced => VIP_ADVANCED_REPORT_NAME,
            Self::Unknown(name) => name,
        }
    }

}

impl From<&str> for ReportKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Basic report: visit count and spend per guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicReport {
    pub name: String,
    pub num_of_visit: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_spend: Decimal,
}

impl From<CustomerStatistic> for BasicReport {
    fn from(stat: CustomerStatistic) -> Self {
        Self {
            name: stat.name,
            num_of_visit: stat.visit_count,
            total_spend: stat.total_spend,
        }
    }
}

/// Advanced report: basic fields + max party size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedReport {
    #[serde(flatten)]
    pub basic: BasicReport,
    pub max_party_size: u32,
}

/// VIP advanced report: advanced fields + VIP credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipAdvancedReport {
    #[serde(flatten)]
    pub advanced: AdvancedReport,
    pub vip_credit: u32,
}

/// One report row, in the variant requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Basic(BasicReport),
    Advanced(AdvancedReport),
    VipAdvanced(VipAdvancedReport),
}

impl Report {
    /// Shared base fields of every variant
    pub fn basic(&self) -> &BasicReport {
        match self {
            Self::Basic(r) => r,
            Self::Advanced(r) => &r.basic,
            Self::VipAdvanced(r) => &r.advanced.basic,
        }
    }

    /// Customer name, the sort key
    pub fn name(&self) -> &str {
        &self.basic().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn basic(name: &str, visits: u32, spend: &str) -> BasicReport {
        BasicReport {
            name: name.to_string(),
            num_of_visit: visits,
            total_spend: dec(spend),
        }
    }

    #[test]
    fn test_report_kind_case_insensitive() {
        assert_eq!(
            ReportKind::from_name("CustomerReservationBasicReport"),
            ReportKind::Basic
        );
        assert_eq!(
            ReportKind::from_name("customerreservationadvancedreport"),
            ReportKind::Advanced
        );
        assert_eq!(
            ReportKind::from_name("CUSTOMERRESERVATIONVIPADVANCEDREPORT"),
            ReportKind::VipAdvanced
        );
    }

    #[test]
    fn test_report_kind_unknown_keeps_name() {
        let kind = ReportKind::from("MonthlyReport");
        assert_eq!(kind, ReportKind::Unknown("MonthlyReport".to_string()));
        assert_eq!(kind.to_string(), "MonthlyReport");
        assert_eq!(ReportKind::Advanced.to_string(), ADVANCED_REPORT_NAME);
    }

    #[test]
    fn test_customer_statistic_accumulates_exactly() {
        let mut stat = CustomerStatistic::first_visit("Alice", dec("10.00"));
        stat.record_visit(dec("15.50")).unwrap();
        stat.record_visit(dec("0.01")).unwrap();
        assert_eq!(stat.visit_count, 3);
        assert_eq!(stat.total_spend.to_string(), "25.51");
    }

    #[test]
    fn test_customer_statistic_overflow_leaves_totals_untouched() {
        let mut stat = CustomerStatistic::first_visit("Alice", Decimal::MAX);
        assert!(stat.record_visit(Decimal::ONE).is_none());
        assert_eq!(stat.visit_count, 1);
        assert_eq!(stat.total_spend, Decimal::MAX);
    }

    #[test]
    fn test_basic_report_serializes_flat_with_exact_decimal() {
        let report = Report::Basic(basic("Alice", 2, "25.50"));
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"name":"Alice","num_of_visit":2,"total_spend":25.50}"#);
    }

    #[test]
    fn test_advanced_report_serializes_flat() {
        let report = Report::Advanced(AdvancedReport {
            basic: basic("Bob", 1, "5.00"),
            max_party_size: MAX_PARTY_SIZE,
        });
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Bob","num_of_visit":1,"total_spend":5.00,"max_party_size":100}"#
        );
    }

    #[test]
    fn test_vip_report_serializes_flat() {
        let report = Report::VipAdvanced(VipAdvancedReport {
            advanced: AdvancedReport {
                basic: basic("Carol", 3, "120.75"),
                max_party_size: MAX_PARTY_SIZE,
            },
            vip_credit: VIP_CREDIT,
        });
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Carol","num_of_visit":3,"total_spend":120.75,"max_party_size":100,"vip_credit":200}"#
        );
    }

    #[test]
    fn test_report_name_reads_through_every_variant() {
        let vip = Report::VipAdvanced(VipAdvancedReport {
            advanced: AdvancedReport {
                basic: basic("Dave", 1, "1"),
                max_party_size: MAX_PARTY_SIZE,
            },
            vip_credit: VIP_CREDIT,
        });
        assert_eq!(vip.name(), "Dave");
        assert_eq!(vip.basic().num_of_visit, 1);
    }

    #[test]
    fn test_basic_report_deserialize() {
        let report: BasicReport =
            serde_json::from_str(r#"{"name":"Alice","num_of_visit":2,"total_spend":25.50}"#)
                .unwrap();
        assert_eq!(report, basic("Alice", 2, "25.50"));
    }
}
