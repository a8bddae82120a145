//! Daily overtime splitting.
//!
//! This module splits one day's total hours into the portion up to the
//! daily threshold and the portion above it. The split feeds the per-day
//! entries of a weekly report; the authoritative pay split is computed at
//! the week level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The split of one day's hours at the daily overtime threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeSplit {
    /// Hours up to the threshold (capped at the threshold).
    pub regular_hours: Decimal,
    /// Hours exceeding the threshold (zero when under).
    pub overtime_hours: Decimal,
}

/// Default daily overtime threshold: 8 hours per day.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Splits a day's worked hours at the daily overtime threshold.
///
/// Hours up to the threshold are regular; any excess is overtime. Both
/// parts always sum back to `worked_hours` for non-negative inputs; a
/// negative day total (possible with backwards clock intervals) is carried
/// entirely in `regular_hours` with zero overtime.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timeclock_engine::calculation::{split_daily_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD};
///
/// let split = split_daily_overtime(Decimal::new(100, 1), DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::new(80, 1));  // 8.0
/// assert_eq!(split.overtime_hours, Decimal::new(20, 1)); // 2.0
/// ```
pub fn split_daily_overtime(worked_hours: Decimal, threshold: Decimal) -> DailyOvertimeSplit {
    if worked_hours > threshold {
        DailyOvertimeSplit {
            regular_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        DailyOvertimeSplit {
            regular_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // DO-001: exactly 8 hours - no overtime
    // ==========================================================================
    #[test]
    fn test_do_001_exactly_8_hours_no_overtime() {
        let split = split_daily_overtime(dec("8.0"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, dec("0.0"));
    }

    // ==========================================================================
    // DO-002: 10 hours - 2 hours overtime
    // ==========================================================================
    #[test]
    fn test_do_002_10_hours_2_hours_overtime() {
        let split = split_daily_overtime(dec("10.0"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, dec("2.0"));
    }

    // ==========================================================================
    // DO-003: 6 hours - no overtime
    // ==========================================================================
    #[test]
    fn test_do_003_6_hours_no_overtime() {
        let split = split_daily_overtime(dec("6.0"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("6.0"));
        assert_eq!(split.overtime_hours, dec("0.0"));
    }

    // ==========================================================================
    // DO-004: 8.5 hours - 0.5 hours overtime
    // ==========================================================================
    #[test]
    fn test_do_004_8_5_hours_half_hour_overtime() {
        let split = split_daily_overtime(dec("8.5"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, dec("0.5"));
    }

    #[test]
    fn test_zero_hours() {
        let split = split_daily_overtime(dec("0.0"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("0.0"));
        assert_eq!(split.overtime_hours, dec("0.0"));
    }

    #[test]
    fn test_negative_day_total_carried_as_regular() {
        let split = split_daily_overtime(dec("-1.5"), dec("8.0"));

        assert_eq!(split.regular_hours, dec("-1.5"));
        assert_eq!(split.overtime_hours, dec("0.0"));
    }

    #[test]
    fn test_parts_sum_to_total() {
        for s in ["0", "3.75", "8", "8.01", "12.5", "24"] {
            let total = dec(s);
            let split = split_daily_overtime(total, dec("8.0"));
            assert_eq!(split.regular_hours + split.overtime_hours, total);
        }
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_daily_overtime(dec("12.0"), dec("10.0"));

        assert_eq!(split.regular_hours, dec("10.0"));
        assert_eq!(split.overtime_hours, dec("2.0"));
    }

    #[test]
    fn test_default_threshold_constant() {
        assert_eq!(DEFAULT_DAILY_OVERTIME_THRESHOLD, dec("8"));
    }
}
