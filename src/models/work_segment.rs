//! WorkSegment model.
//!
//! A [`WorkSegment`] is a team-scoped labor interval, orthogonal to the
//! individual [`TimeBlock`](super::TimeBlock) records. Segments exist for
//! crews whose members are not individually clocked in, and are valued by
//! the crew multiplier: headcount times duration.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::crew_hours;

/// A team-scoped labor interval belonging to one work order.
///
/// `team_size` is the declared headcount and is authoritative for the hour
/// formula. `team_members` lists the workers present by display identifier
/// for audit and readability only; the two may legitimately disagree
/// ("5 workers, only 2 tracked by name").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// Unique identifier for the segment record.
    pub id: Uuid,
    /// The work order this segment belongs to. Summing `total_hours` over
    /// a work order's closed segments yields its accounted labor-hours.
    pub work_order_id: String,
    /// When the crew started this segment.
    pub start_time: NaiveDateTime,
    /// When the crew stopped; unset while the segment is ongoing.
    pub end_time: Option<NaiveDateTime>,
    /// Declared headcount, authoritative for the hour calculation.
    pub team_size: u32,
    /// Display identifiers of the workers present; not used in the formula.
    #[serde(default)]
    pub team_members: Vec<String>,
    /// Crew-multiplied hours. Zero until the segment closes; computed once
    /// at close as `elapsed_hours × team_size`.
    pub total_hours: Decimal,
}

impl WorkSegment {
    /// Creates a new ongoing segment.
    pub fn start(
        work_order_id: impl Into<String>,
        start_time: NaiveDateTime,
        team_size: u32,
        team_members: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            work_order_id: work_order_id.into(),
            start_time,
            end_time: None,
            team_size,
            team_members,
            total_hours: Decimal::ZERO,
        }
    }

    /// Closes the segment at `end_time` and computes its crew hours.
    ///
    /// An `end_time` before `start_time` produces negative hours; ordering
    /// validation is the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    /// use timeclock_engine::models::WorkSegment;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let mut segment = WorkSegment::start("wo-7", start, 3, vec![]);
    /// segment.close(end);
    /// assert_eq!(segment.total_hours, Decimal::new(60, 1)); // 6.0
    /// ```
    pub fn close(&mut self, end_time: NaiveDateTime) {
        self.total_hours = crew_hours(self.start_time, end_time, self.team_size);
        self.end_time = Some(end_time);
    }

    /// True while the segment has no end time.
    pub fn is_ongoing(&self) -> bool {
        self.end_time.is_none()
    }
}
