//! Derived reporting aggregates.
//!
//! This module contains the [`WeeklyReport`] and [`PayrollRecord`] types
//! produced by the aggregation engine, plus the per-day [`DailyEntry`].
//! All three are computed on demand from stored time blocks and never
//! independently mutated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's worth of closed-block hours inside a weekly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The calendar day.
    pub date: NaiveDate,
    /// Sum of `hours_worked` over the day's closed blocks.
    pub hours: Decimal,
    /// The portion of `hours` above the daily overtime threshold
    /// (informational; the weekly split below is authoritative for pay).
    pub overtime_hours: Decimal,
}

/// A Monday-aligned weekly rollup for one worker.
///
/// The regular/overtime split is computed at the week level: hours up to
/// the weekly threshold are regular, the excess is overtime, and the two
/// always sum back to `weekly_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// The worker this report covers.
    pub worker_id: String,
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// One entry per day, Monday through Sunday.
    pub daily_entries: Vec<DailyEntry>,
    /// Hours up to the weekly overtime threshold.
    pub total_regular_hours: Decimal,
    /// Hours beyond the weekly overtime threshold.
    pub total_overtime_hours: Decimal,
    /// Sum of all daily entries.
    pub weekly_total: Decimal,
    /// True when `weekly_total` exceeds the weekly threshold.
    pub is_weekly_overtime: bool,
}

/// An hours total over an arbitrary pay period.
///
/// Unlike [`WeeklyReport`] there is no overtime split; the period is a
/// half-open interval `[period_start, period_end)` chosen by the caller and
/// need not align to week boundaries. The pay figure is a pure pass-through
/// multiplication by a caller-supplied rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The worker this record covers.
    pub worker_id: String,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Day after the last day of the pay period (exclusive).
    pub period_end: NaiveDate,
    /// Sum of closed-block hours over the period.
    pub total_hours: Decimal,
    /// The hourly rate supplied by the caller's wage source.
    pub hourly_rate: Decimal,
    /// `total_hours × hourly_rate`.
    pub estimated_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekly_report_serialization_round_trip() {
        let report = WeeklyReport {
            worker_id: "w-001".to_string(),
            week_start: make_date("2026-01-12"),
            daily_entries: vec![DailyEntry {
                date: make_date("2026-01-12"),
                hours: Decimal::new(85, 1),
                overtime_hours: Decimal::new(5, 1),
            }],
            total_regular_hours: Decimal::new(85, 1),
            total_overtime_hours: Decimal::ZERO,
            weekly_total: Decimal::new(85, 1),
            is_weekly_overtime: false,
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: WeeklyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }

    #[test]
    fn test_payroll_record_serialization_round_trip() {
        let record = PayrollRecord {
            worker_id: "w-001".to_string(),
            period_start: make_date("2026-01-01"),
            period_end: make_date("2026-01-15"),
            total_hours: Decimal::new(760, 1),
            hourly_rate: Decimal::new(2500, 2),
            estimated_pay: Decimal::new(1900, 0),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PayrollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserialize_weekly_report_fields() {
        let json = r#"{
            "worker_id": "w-003",
            "week_start": "2026-01-12",
            "daily_entries": [],
            "total_regular_hours": "40",
            "total_overtime_hours": "2.5",
            "weekly_total": "42.5",
            "is_weekly_overtime": true
        }"#;

        let report: WeeklyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.week_start, make_date("2026-01-12"));
        assert_eq!(report.total_overtime_hours, Decimal::new(25, 1));
        assert!(report.is_weekly_overtime);
    }
}
