//! Crew-multiplier hour calculation.
//!
//! A crew task is valued by its combined labor-hours: the elapsed duration
//! of the task multiplied by the declared headcount. This is deliberately
//! independent of individual clock records for the same interval.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Converts the span between two timestamps to decimal hours.
///
/// Works on whole seconds; the result may be fractional and, when `end`
/// precedes `start`, negative. This function performs no ordering
/// validation.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

/// Computes the team-multiplied hours for a bounded crew interval.
///
/// The formula is `elapsed_hours(start, end) × team_size`. `team_size` is
/// the declared headcount, not the length of any member list; a zero
/// headcount yields zero hours, and a backwards interval yields a negative
/// total that propagates to the caller unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use timeclock_engine::calculation::crew_hours;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(crew_hours(start, end, 3), Decimal::new(60, 1)); // 6.0
/// assert_eq!(crew_hours(start, end, 0), Decimal::ZERO);
/// ```
pub fn crew_hours(start: NaiveDateTime, end: NaiveDateTime, team_size: u32) -> Decimal {
    elapsed_hours(start, end) * Decimal::from(team_size)
}
