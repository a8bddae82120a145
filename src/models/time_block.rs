//! TimeBlock model and duration helpers.
//!
//! A [`TimeBlock`] is one contiguous clocked interval for a single worker
//! on a single calendar day. Blocks are created open at clock-in and closed
//! exactly once at clock-out.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Converts a time span to decimal hours.
///
/// The conversion works on whole seconds, so minute-granularity inputs
/// produce exact decimal results. The span may be negative; the sign is
/// preserved.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use timeclock_engine::models::duration_hours;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(duration_hours(start, end), Decimal::new(85, 1)); // 8.5
/// ```
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

/// One contiguous clocked interval for a single worker on a single day.
///
/// A block is "open" from clock-in until clock-out: `clock_out_time` is
/// unset, `hours_worked` is zero, and `is_active` is true. Closing the
/// block is its only mutation and is terminal.
///
/// Invariant: for a given worker, at most one block across all dates is
/// active at any time. The store enforces this on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Unique identifier for the block record.
    pub id: Uuid,
    /// Identifier of the worker this block belongs to. The worker record
    /// itself is owned by the worker directory, not by this engine.
    pub worker_id: String,
    /// The calendar day this block belongs to, fixed at clock-in. A block
    /// that crosses midnight keeps this date and is not split.
    pub date: NaiveDate,
    /// 1-based sequence number, unique per worker per day, assigned in
    /// clock-in order. Resets to 1 on each new calendar day.
    pub block_number: u32,
    /// The clock-in timestamp.
    pub clock_in_time: NaiveDateTime,
    /// The clock-out timestamp; unset while the block is open.
    pub clock_out_time: Option<NaiveDateTime>,
    /// Decimal hours between clock-in and clock-out. Zero while open;
    /// computed once at clock-out. Negative when the clock-out timestamp
    /// precedes the clock-in timestamp (the engine does not reject this).
    pub hours_worked: Decimal,
    /// True while the block has no clock-out time.
    pub is_active: bool,
}

impl TimeBlock {
    /// Creates a new open block for a worker.
    ///
    /// The block's `date` is the calendar day of `clock_in_time`.
    pub fn open(worker_id: impl Into<String>, block_number: u32, clock_in_time: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            worker_id: worker_id.into(),
            date: clock_in_time.date(),
            block_number,
            clock_in_time,
            clock_out_time: None,
            hours_worked: Decimal::ZERO,
            is_active: true,
        }
    }

    /// Closes the block at the given timestamp, computing `hours_worked`.
    ///
    /// If `clock_out_time` precedes `clock_in_time` the computed hours are
    /// negative; callers that consider that invalid must validate upstream.
    pub fn close(&mut self, clock_out_time: NaiveDateTime) {
        self.hours_worked = duration_hours(self.clock_in_time, clock_out_time);
        self.clock_out_time = Some(clock_out_time);
        self.is_active = false;
    }

    /// Hours elapsed from clock-in until `asof`, for open blocks.
    ///
    /// This is a read-time projection used by "current total" queries; it
    /// is never stored. Closed blocks report their final `hours_worked`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    /// use timeclock_engine::models::TimeBlock;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let asof = NaiveDateTime::parse_from_str("2026-01-15 11:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let block = TimeBlock::open("w-001", 1, start);
    /// assert_eq!(block.elapsed_hours(asof), Decimal::new(3, 0));
    /// ```
    pub fn elapsed_hours(&self, asof: NaiveDateTime) -> Decimal {
        if self.is_active {
            duration_hours(self.clock_in_time, asof)
        } else {
            self.hours_worked
        }
    }
}
