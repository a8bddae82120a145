//! Calculation logic for the Time Tracking Engine.
//!
//! This module contains the pure calculation functions: the crew-multiplier
//! formula for team work segments, daily and weekly overtime splitting,
//! Monday-aligned week boundary handling, and H:MM hour formatting for the
//! reporting facade.

mod crew_hours;
mod daily_overtime;
mod display;
mod week;
mod weekly_overtime;

pub use crew_hours::{crew_hours, elapsed_hours};
pub use daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DailyOvertimeSplit, split_daily_overtime};
pub use display::format_hours;
pub use week::{week_days, week_start};
pub use weekly_overtime::{
    DEFAULT_WEEKLY_OVERTIME_THRESHOLD, WeeklyOvertimeSplit, split_weekly_overtime,
};
