//! The work segment lifecycle service.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkSegment;
use crate::store::WorkSegmentRepository;

/// Starts, closes, and re-crews work segments, and totals them per work
/// order.
///
/// Segment hours and individual time block hours are two independent
/// accounting models for the same real-world period; this service never
/// reconciles them with clock records, and a work order's segment total
/// may legitimately differ from the sum of its members' block hours.
pub struct SegmentTracker {
    segments: Arc<dyn WorkSegmentRepository>,
}

impl SegmentTracker {
    /// Creates a tracker backed by the given repository.
    pub fn new(segments: Arc<dyn WorkSegmentRepository>) -> Self {
        Self { segments }
    }

    /// Opens a new segment for a work order.
    ///
    /// `team_size` is the declared headcount and drives the hour formula;
    /// `team_members` is audit-only and may list fewer (or more) names.
    pub fn start_segment(
        &self,
        work_order_id: &str,
        start_time: NaiveDateTime,
        team_size: u32,
        team_members: Vec<String>,
    ) -> EngineResult<WorkSegment> {
        let segment = WorkSegment::start(work_order_id, start_time, team_size, team_members);
        self.segments.save(&segment)?;

        info!(
            work_order_id = %work_order_id,
            segment_id = %segment.id,
            team_size,
            "work segment started"
        );
        Ok(segment)
    }

    /// Closes a segment at `end_time`, computing its crew hours exactly
    /// once.
    ///
    /// An `end_time` before the segment's start produces a negative total
    /// that is stored unchanged; ordering validation belongs upstream.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SegmentNotFound`] for an unknown id and
    /// [`EngineError::SegmentClosed`] when the segment already has an end
    /// time.
    pub fn close_segment(
        &self,
        segment_id: Uuid,
        end_time: NaiveDateTime,
    ) -> EngineResult<WorkSegment> {
        let mut segment =
            self.segments
                .find(segment_id)?
                .ok_or_else(|| EngineError::SegmentNotFound {
                    segment_id: segment_id.to_string(),
                })?;

        if !segment.is_ongoing() {
            return Err(EngineError::SegmentClosed {
                segment_id: segment_id.to_string(),
            });
        }

        segment.close(end_time);
        self.segments.update(&segment)?;

        info!(
            work_order_id = %segment.work_order_id,
            segment_id = %segment.id,
            total_hours = %segment.total_hours,
            "work segment closed"
        );
        Ok(segment)
    }

    /// Records a crew composition change at `at`: closes the running
    /// segment and opens a successor with the new crew.
    ///
    /// Segments are never retroactively split; the closed segment keeps the
    /// old crew's hours and the successor starts accruing from `at`.
    /// Returns the newly opened segment.
    pub fn change_crew(
        &self,
        segment_id: Uuid,
        at: NaiveDateTime,
        new_team_size: u32,
        new_team_members: Vec<String>,
    ) -> EngineResult<WorkSegment> {
        let closed = self.close_segment(segment_id, at)?;
        self.start_segment(&closed.work_order_id, at, new_team_size, new_team_members)
    }

    /// Sums `total_hours` over a work order's closed segments.
    ///
    /// Ongoing segments contribute zero, matching their stored value.
    pub fn work_order_hours(&self, work_order_id: &str) -> EngineResult<Decimal> {
        let segments = self.segments.find_by_work_order(work_order_id)?;
        Ok(segments.iter().map(|s| s.total_hours).sum())
    }

    /// Returns a work order's segments ordered by start time.
    pub fn work_order_segments(&self, work_order_id: &str) -> EngineResult<Vec<WorkSegment>> {
        Ok(self.segments.find_by_work_order(work_order_id)?)
    }
}
