//! The clock-in/clock-out service and its read-side query facade.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeBlock;
use crate::store::{StoreError, TimeBlockRepository};

/// Records clock events for workers and answers clock-state queries.
///
/// The service holds no mutable state of its own; the critical section
/// lives in the repository, whose `save` performs an atomic
/// check-and-insert for open blocks. Of two concurrent clock-ins for one
/// worker, exactly one succeeds and the loser observes
/// [`EngineError::AlreadyClockedIn`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use timeclock_engine::clock::TimeClock;
/// use timeclock_engine::store::InMemoryTimeBlockStore;
///
/// let clock = TimeClock::new(Arc::new(InMemoryTimeBlockStore::new()));
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// clock.clock_in("w-001", start).unwrap();
/// let block = clock.clock_out("w-001", end).unwrap();
/// assert_eq!(block.hours_worked, Decimal::new(80, 1)); // 8.0
/// ```
pub struct TimeClock {
    blocks: Arc<dyn TimeBlockRepository>,
}

impl TimeClock {
    /// Creates a clock service backed by the given repository.
    pub fn new(blocks: Arc<dyn TimeBlockRepository>) -> Self {
        Self { blocks }
    }

    /// Clocks a worker in at `timestamp`, opening a new block.
    ///
    /// The new block's date is the calendar day of `timestamp` and its
    /// block number is one past the highest number already used for that
    /// worker on that day (starting at 1).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyClockedIn`] when the worker has an
    /// open block anywhere in the store, whether detected by the
    /// precondition read or by losing the insert race. No block is created
    /// on failure.
    pub fn clock_in(&self, worker_id: &str, timestamp: NaiveDateTime) -> EngineResult<TimeBlock> {
        if self.blocks.find_active(worker_id)?.is_some() {
            return Err(EngineError::AlreadyClockedIn {
                worker_id: worker_id.to_string(),
            });
        }

        let day_blocks = self.blocks.find_by_date(worker_id, timestamp.date())?;
        let block_number = day_blocks
            .iter()
            .map(|b| b.block_number)
            .max()
            .unwrap_or(0)
            + 1;

        let block = TimeBlock::open(worker_id, block_number, timestamp);
        match self.blocks.save(&block) {
            Ok(()) => {
                info!(
                    worker_id = %worker_id,
                    block_number,
                    date = %block.date,
                    "worker clocked in"
                );
                Ok(block)
            }
            // Lost the race against a concurrent clock-in
            Err(StoreError::ActiveBlockExists { worker_id }) => {
                Err(EngineError::AlreadyClockedIn { worker_id })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Clocks a worker out at `timestamp`, closing their open block.
    ///
    /// A `timestamp` earlier than the clock-in time produces a negative
    /// `hours_worked`; the engine records it unchanged and leaves rejection
    /// to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotClockedIn`] when the worker has no open
    /// block, and [`EngineError::InvalidState`] when the stored open block
    /// is internally inconsistent. Nothing is mutated on failure.
    pub fn clock_out(&self, worker_id: &str, timestamp: NaiveDateTime) -> EngineResult<TimeBlock> {
        let mut block =
            self.blocks
                .find_active(worker_id)?
                .ok_or_else(|| EngineError::NotClockedIn {
                    worker_id: worker_id.to_string(),
                })?;

        if block.clock_out_time.is_some() {
            return Err(EngineError::InvalidState {
                worker_id: worker_id.to_string(),
                message: "active block already has a clock-out time".to_string(),
            });
        }

        block.close(timestamp);
        self.blocks.update(&block)?;

        info!(
            worker_id = %worker_id,
            block_number = block.block_number,
            hours = %block.hours_worked,
            "worker clocked out"
        );
        Ok(block)
    }

    /// Returns whether the worker currently has an open block.
    pub fn is_clocked_in(&self, worker_id: &str) -> EngineResult<bool> {
        Ok(self.blocks.find_active(worker_id)?.is_some())
    }

    /// Returns all of the worker's blocks for one calendar day, ordered by
    /// block number.
    pub fn time_blocks(&self, worker_id: &str, date: NaiveDate) -> EngineResult<Vec<TimeBlock>> {
        Ok(self.blocks.find_by_date(worker_id, date)?)
    }

    /// Sums `hours_worked` over the worker's closed blocks for one day.
    ///
    /// Open blocks contribute nothing here; see
    /// [`current_total_hours`](Self::current_total_hours) for a total that
    /// includes the running block.
    pub fn total_hours(&self, worker_id: &str, date: NaiveDate) -> EngineResult<Decimal> {
        let blocks = self.blocks.find_by_date(worker_id, date)?;
        Ok(blocks
            .iter()
            .filter(|b| !b.is_active)
            .map(|b| b.hours_worked)
            .sum())
    }

    /// Sums the worker's hours for one day including the open block's
    /// elapsed-so-far duration as of `asof`.
    ///
    /// The open-block contribution is a read-time projection and is never
    /// written back to the store.
    pub fn current_total_hours(
        &self,
        worker_id: &str,
        date: NaiveDate,
        asof: NaiveDateTime,
    ) -> EngineResult<Decimal> {
        let blocks = self.blocks.find_by_date(worker_id, date)?;
        Ok(blocks.iter().map(|b| b.elapsed_hours(asof)).sum())
    }
}
