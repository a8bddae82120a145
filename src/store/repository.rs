//! Repository contracts for time blocks and work segments.
//!
//! The engine consumes persistence through these narrow traits. A
//! production implementation backs them with a database; the in-memory
//! implementations in [`super::memory`] back them with process-local maps.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{TimeBlock, WorkSegment};

/// Errors surfaced by a repository implementation.
///
/// Constraint violations are typed so the service layer can translate them
/// into domain errors; everything else is an opaque backend failure that
/// propagates unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An open block already exists for the worker.
    ///
    /// Raised by [`TimeBlockRepository::save`] when inserting a second
    /// active block would violate the one-open-block-per-worker constraint.
    #[error("an active time block already exists for worker '{worker_id}'")]
    ActiveBlockExists {
        /// The worker with the existing open block.
        worker_id: String,
    },

    /// An update referenced a record that is not in the store.
    #[error("record '{id}' not found")]
    RecordNotFound {
        /// The id of the missing record.
        id: String,
    },

    /// The underlying backend failed (I/O, lock poisoning, connectivity).
    #[error("backend failure: {message}")]
    Backend {
        /// A description of the failure.
        message: String,
    },
}

/// Durable storage for [`TimeBlock`] records.
///
/// Implementations must make `save` an atomic check-and-insert: when the
/// worker already has an active block anywhere in the store, saving a new
/// active block fails with [`StoreError::ActiveBlockExists`] and writes
/// nothing. This is what makes concurrent clock-ins race-safe without a
/// service-side lock.
pub trait TimeBlockRepository: Send + Sync {
    /// Inserts a new block, enforcing the one-open-block-per-worker
    /// constraint atomically.
    fn save(&self, block: &TimeBlock) -> Result<(), StoreError>;

    /// Replaces an existing block, matched by id.
    fn update(&self, block: &TimeBlock) -> Result<(), StoreError>;

    /// Returns the worker's single open block, if any, across all dates.
    fn find_active(&self, worker_id: &str) -> Result<Option<TimeBlock>, StoreError>;

    /// Returns all of the worker's blocks for one calendar day, ordered by
    /// block number.
    fn find_by_date(&self, worker_id: &str, date: NaiveDate) -> Result<Vec<TimeBlock>, StoreError>;

    /// Returns all of the worker's blocks with dates in `[start, end)`,
    /// ordered by date then block number.
    fn find_by_date_range(
        &self,
        worker_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeBlock>, StoreError>;
}

/// Durable storage for [`WorkSegment`] records.
pub trait WorkSegmentRepository: Send + Sync {
    /// Inserts a new segment.
    fn save(&self, segment: &WorkSegment) -> Result<(), StoreError>;

    /// Replaces an existing segment, matched by id.
    fn update(&self, segment: &WorkSegment) -> Result<(), StoreError>;

    /// Returns the segment with the given id, if present.
    fn find(&self, id: Uuid) -> Result<Option<WorkSegment>, StoreError>;

    /// Returns all segments for a work order, ordered by start time.
    fn find_by_work_order(&self, work_order_id: &str) -> Result<Vec<WorkSegment>, StoreError>;
}
