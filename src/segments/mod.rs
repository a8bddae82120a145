//! Crew work segment tracking.
//!
//! Segments record team-scoped labor intervals per work order, valued by
//! the crew multiplier rather than by individual attendance.

mod tracker;

pub use tracker::SegmentTracker;
