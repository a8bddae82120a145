//! Hour formatting for the reporting facade.
//!
//! Decimal hour totals render as `H:MM`, with minutes rounded to the
//! nearest whole minute.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats decimal hours as `H:MM`.
///
/// Minutes round to the nearest whole minute (`0.1h → "0:06"`); negative
/// totals render with a leading sign.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timeclock_engine::calculation::format_hours;
///
/// assert_eq!(format_hours(Decimal::new(85, 1)), "8:30");   // 8.5
/// assert_eq!(format_hours(Decimal::new(1, 1)), "0:06");    // 0.1
/// assert_eq!(format_hours(Decimal::new(-20, 1)), "-2:00"); // -2.0
/// ```
pub fn format_hours(hours: Decimal) -> String {
    let total_minutes = (hours.abs() * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

    let sign = if hours.is_sign_negative() && total_minutes > 0 {
        "-"
    } else {
        ""
    };

    format!("{}{}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}
