//! Weekly overtime splitting.
//!
//! The authoritative regular/overtime split for a weekly report happens at
//! the week level: hours up to the weekly threshold are regular, the
//! excess is overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The split of a week's hours at the weekly overtime threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOvertimeSplit {
    /// Hours up to the threshold (capped at the threshold).
    pub regular_hours: Decimal,
    /// Hours exceeding the threshold (zero when under).
    pub overtime_hours: Decimal,
    /// True when the week's total exceeds the threshold.
    pub is_overtime: bool,
}

/// Default weekly overtime threshold: 40 hours per Monday–Sunday week.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Splits a week's total hours at the weekly overtime threshold.
///
/// For any input, `regular_hours + overtime_hours == weekly_total`, and
/// `overtime_hours` is positive exactly when the total exceeds the
/// threshold.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timeclock_engine::calculation::{split_weekly_overtime, DEFAULT_WEEKLY_OVERTIME_THRESHOLD};
///
/// let split = split_weekly_overtime(Decimal::new(425, 1), DEFAULT_WEEKLY_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::new(40, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(25, 1)); // 2.5
/// assert!(split.is_overtime);
/// ```
pub fn split_weekly_overtime(weekly_total: Decimal, threshold: Decimal) -> WeeklyOvertimeSplit {
    let regular_hours = weekly_total.min(threshold);
    let overtime_hours = (weekly_total - threshold).max(Decimal::ZERO);

    WeeklyOvertimeSplit {
        regular_hours,
        overtime_hours,
        is_overtime: weekly_total > threshold,
    }
}
