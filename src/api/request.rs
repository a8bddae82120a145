//! Request types for the Time Tracking Engine API.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Body for `POST /clock-in` and `POST /clock-out`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockEventRequest {
    /// The worker the event applies to.
    pub worker_id: String,
    /// The event timestamp.
    pub timestamp: NaiveDateTime,
}

/// Body for `POST /segments`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSegmentRequest {
    /// The work order the segment belongs to.
    pub work_order_id: String,
    /// When the crew started.
    pub start_time: NaiveDateTime,
    /// Declared headcount; authoritative for the hour formula.
    pub team_size: u32,
    /// Worker names present, for audit only.
    #[serde(default)]
    pub team_members: Vec<String>,
}

/// Body for `POST /segments/{id}/close`.
#[derive(Debug, Clone, Deserialize)]
pub struct CloseSegmentRequest {
    /// When the crew stopped.
    pub end_time: NaiveDateTime,
}

/// Body for `POST /segments/{id}/crew`.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewChangeRequest {
    /// When the composition changed; closes the old segment and starts the
    /// new one at this instant.
    pub at: NaiveDateTime,
    /// The new declared headcount.
    pub team_size: u32,
    /// The new member list, for audit only.
    #[serde(default)]
    pub team_members: Vec<String>,
}

/// Query parameters selecting one calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct DayQuery {
    /// The calendar day.
    pub date: NaiveDate,
}

/// Query parameters selecting a report week.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekQuery {
    /// Any date in the week; normalized to its Monday.
    pub week_start: NaiveDate,
}

/// Query parameters selecting a pay period.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollQuery {
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Day after the last day of the period (exclusive).
    pub period_end: NaiveDate,
    /// Hourly rate from the caller's wage source; the configured default
    /// applies when omitted.
    pub hourly_rate: Option<Decimal>,
}
