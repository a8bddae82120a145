//! The weekly/payroll aggregation engine.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{split_daily_overtime, split_weekly_overtime, week_days, week_start};
use crate::config::TrackingConfig;
use crate::error::EngineResult;
use crate::models::{DailyEntry, PayrollRecord, TimeBlock, WeeklyReport};
use crate::store::TimeBlockRepository;

/// Produces reporting-grade rollups from closed time blocks.
///
/// Reads are "read committed": a report generated while a block is being
/// written may include or omit the in-flight block, which is acceptable
/// because reports are recomputed on demand and never stored.
pub struct ReportEngine {
    blocks: Arc<dyn TimeBlockRepository>,
    config: TrackingConfig,
}

fn closed_hours(blocks: &[TimeBlock]) -> Decimal {
    blocks
        .iter()
        .filter(|b| !b.is_active)
        .map(|b| b.hours_worked)
        .sum()
}

impl ReportEngine {
    /// Creates an engine over the given repository and configuration.
    pub fn new(blocks: Arc<dyn TimeBlockRepository>, config: TrackingConfig) -> Self {
        Self { blocks, config }
    }

    /// Generates the weekly report for the week containing `week_start_date`.
    ///
    /// The date normalizes down to its Monday; the report covers that
    /// Monday through the following Sunday, one [`DailyEntry`] per day.
    /// Each entry records the portion of its day above the daily threshold,
    /// but the regular/overtime split used for the weekly summary is
    /// computed from the weekly total against the weekly threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use chrono::NaiveDate;
    /// use timeclock_engine::config::TrackingConfig;
    /// use timeclock_engine::reporting::ReportEngine;
    /// use timeclock_engine::store::InMemoryTimeBlockStore;
    ///
    /// let engine = ReportEngine::new(
    ///     Arc::new(InMemoryTimeBlockStore::new()),
    ///     TrackingConfig::default(),
    /// );
    ///
    /// // A Thursday: the report still starts on Monday 2026-01-12.
    /// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let report = engine.generate_weekly_report("w-001", thursday).unwrap();
    /// assert_eq!(report.week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
    /// assert_eq!(report.daily_entries.len(), 7);
    /// ```
    pub fn generate_weekly_report(
        &self,
        worker_id: &str,
        week_start_date: NaiveDate,
    ) -> EngineResult<WeeklyReport> {
        let monday = week_start(week_start_date);

        let mut daily_entries = Vec::with_capacity(7);
        for day in week_days(monday) {
            let day_blocks = self.blocks.find_by_date(worker_id, day)?;
            let hours = closed_hours(&day_blocks);
            let day_split = split_daily_overtime(hours, self.config.daily_overtime_threshold);

            daily_entries.push(DailyEntry {
                date: day,
                hours,
                overtime_hours: day_split.overtime_hours,
            });
        }

        let weekly_total: Decimal = daily_entries.iter().map(|e| e.hours).sum();
        let split = split_weekly_overtime(weekly_total, self.config.weekly_overtime_threshold);

        Ok(WeeklyReport {
            worker_id: worker_id.to_string(),
            week_start: monday,
            daily_entries,
            total_regular_hours: split.regular_hours,
            total_overtime_hours: split.overtime_hours,
            weekly_total,
            is_weekly_overtime: split.is_overtime,
        })
    }

    /// Computes the payroll record for the half-open period
    /// `[period_start, period_end)`.
    ///
    /// The period need not align to week boundaries and carries no
    /// overtime split. `hourly_rate` comes from the caller's wage source;
    /// when `None`, the configured default rate applies. The pay figure is
    /// `total_hours × rate` and nothing more.
    pub fn calculate_payroll(
        &self,
        worker_id: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
        hourly_rate: Option<Decimal>,
    ) -> EngineResult<PayrollRecord> {
        let blocks = self
            .blocks
            .find_by_date_range(worker_id, period_start, period_end)?;
        let total_hours = closed_hours(&blocks);
        let rate = hourly_rate.unwrap_or(self.config.default_hourly_rate);

        Ok(PayrollRecord {
            worker_id: worker_id.to_string(),
            period_start,
            period_end,
            total_hours,
            hourly_rate: rate,
            estimated_pay: total_hours * rate,
        })
    }
}
