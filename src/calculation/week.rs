//! Week boundary handling.
//!
//! Weeks run Monday through Sunday. Any date normalizes down to the Monday
//! of its week; a weekly report covers the seven days from that Monday.

use chrono::{Datelike, Days, NaiveDate};

/// Returns the Monday of the week containing `date`.
///
/// A Monday maps to itself.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timeclock_engine::calculation::week_start;
///
/// // 2026-01-15 is a Thursday; its week starts Monday 2026-01-12.
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    // num_days_from_monday is at most 6, so the subtraction cannot leave
    // the representable date range for any date the engine handles
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Returns the seven days of the week starting at `monday`, in order.
pub fn week_days(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .filter_map(|i| monday.checked_add_days(Days::new(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_maps_to_itself() {
        let monday = make_date("2026-01-12");
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn test_midweek_normalizes_to_monday() {
        assert_eq!(week_start(make_date("2026-01-14")), make_date("2026-01-12"));
        assert_eq!(week_start(make_date("2026-01-15")), make_date("2026-01-12"));
    }

    #[test]
    fn test_sunday_belongs_to_preceding_monday() {
        assert_eq!(week_start(make_date("2026-01-18")), make_date("2026-01-12"));
    }

    #[test]
    fn test_next_monday_starts_new_week() {
        assert_eq!(week_start(make_date("2026-01-19")), make_date("2026-01-19"));
    }

    #[test]
    fn test_week_crossing_month_boundary() {
        // 2026-02-01 is a Sunday of the week starting 2026-01-26
        assert_eq!(week_start(make_date("2026-02-01")), make_date("2026-01-26"));
    }

    #[test]
    fn test_week_days_returns_seven_consecutive_days() {
        let days = week_days(make_date("2026-01-12"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], make_date("2026-01-12"));
        assert_eq!(days[6], make_date("2026-01-18"));
    }
}
