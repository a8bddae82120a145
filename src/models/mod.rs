//! Core data models for the Time Tracking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod report;
mod time_block;
mod work_segment;
mod worker;

pub use report::{DailyEntry, PayrollRecord, WeeklyReport};
pub use time_block::{TimeBlock, duration_hours};
pub use work_segment::WorkSegment;
pub use worker::Worker;
