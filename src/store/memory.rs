//! In-memory repository implementations.
//!
//! These back the repository traits with process-local maps behind a
//! mutex. The time block store performs its uniqueness check and insert
//! under one lock acquisition, which makes it race-safe for concurrent
//! clock-ins.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{TimeBlock, WorkSegment};

use super::repository::{StoreError, TimeBlockRepository, WorkSegmentRepository};

fn poisoned() -> StoreError {
    StoreError::Backend {
        message: "store lock poisoned".to_string(),
    }
}

/// In-memory [`TimeBlockRepository`] keyed by worker id.
#[derive(Debug, Default)]
pub struct InMemoryTimeBlockStore {
    blocks: Mutex<HashMap<String, Vec<TimeBlock>>>,
}

impl InMemoryTimeBlockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeBlockRepository for InMemoryTimeBlockStore {
    fn save(&self, block: &TimeBlock) -> Result<(), StoreError> {
        let mut blocks = self.blocks.lock().map_err(|_| poisoned())?;
        let worker_blocks = blocks.entry(block.worker_id.clone()).or_default();

        // Check and insert under the same lock acquisition: two concurrent
        // saves of active blocks for one worker cannot both pass the check.
        if block.is_active && worker_blocks.iter().any(|b| b.is_active) {
            return Err(StoreError::ActiveBlockExists {
                worker_id: block.worker_id.clone(),
            });
        }

        worker_blocks.push(block.clone());
        Ok(())
    }

    fn update(&self, block: &TimeBlock) -> Result<(), StoreError> {
        let mut blocks = self.blocks.lock().map_err(|_| poisoned())?;
        let worker_blocks = blocks.entry(block.worker_id.clone()).or_default();

        match worker_blocks.iter_mut().find(|b| b.id == block.id) {
            Some(existing) => {
                *existing = block.clone();
                Ok(())
            }
            None => Err(StoreError::RecordNotFound {
                id: block.id.to_string(),
            }),
        }
    }

    fn find_active(&self, worker_id: &str) -> Result<Option<TimeBlock>, StoreError> {
        let blocks = self.blocks.lock().map_err(|_| poisoned())?;
        Ok(blocks
            .get(worker_id)
            .and_then(|worker_blocks| worker_blocks.iter().find(|b| b.is_active).cloned()))
    }

    fn find_by_date(&self, worker_id: &str, date: NaiveDate) -> Result<Vec<TimeBlock>, StoreError> {
        let blocks = self.blocks.lock().map_err(|_| poisoned())?;
        let mut result: Vec<TimeBlock> = blocks
            .get(worker_id)
            .map(|worker_blocks| {
                worker_blocks
                    .iter()
                    .filter(|b| b.date == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        result.sort_by_key(|b| b.block_number);
        Ok(result)
    }

    fn find_by_date_range(
        &self,
        worker_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeBlock>, StoreError> {
        let blocks = self.blocks.lock().map_err(|_| poisoned())?;
        let mut result: Vec<TimeBlock> = blocks
            .get(worker_id)
            .map(|worker_blocks| {
                worker_blocks
                    .iter()
                    .filter(|b| b.date >= start && b.date < end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        result.sort_by_key(|b| (b.date, b.block_number));
        Ok(result)
    }
}

/// In-memory [`WorkSegmentRepository`] keyed by segment id.
#[derive(Debug, Default)]
pub struct InMemoryWorkSegmentStore {
    segments: Mutex<HashMap<Uuid, WorkSegment>>,
}

impl InMemoryWorkSegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkSegmentRepository for InMemoryWorkSegmentStore {
    fn save(&self, segment: &WorkSegment) -> Result<(), StoreError> {
        let mut segments = self.segments.lock().map_err(|_| poisoned())?;
        segments.insert(segment.id, segment.clone());
        Ok(())
    }

    fn update(&self, segment: &WorkSegment) -> Result<(), StoreError> {
        let mut segments = self.segments.lock().map_err(|_| poisoned())?;
        match segments.get_mut(&segment.id) {
            Some(existing) => {
                *existing = segment.clone();
                Ok(())
            }
            None => Err(StoreError::RecordNotFound {
                id: segment.id.to_string(),
            }),
        }
    }

    fn find(&self, id: Uuid) -> Result<Option<WorkSegment>, StoreError> {
        let segments = self.segments.lock().map_err(|_| poisoned())?;
        Ok(segments.get(&id).cloned())
    }

    fn find_by_work_order(&self, work_order_id: &str) -> Result<Vec<WorkSegment>, StoreError> {
        let segments = self.segments.lock().map_err(|_| poisoned())?;
        let mut result: Vec<WorkSegment> = segments
            .values()
            .filter(|s| s.work_order_id == work_order_id)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.start_time);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_save_and_find_active() {
        let store = InMemoryTimeBlockStore::new();
        let block = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));
        store.save(&block).unwrap();

        let active = store.find_active("w-001").unwrap();
        assert_eq!(active, Some(block));
    }

    #[test]
    fn test_find_active_returns_none_without_open_block() {
        let store = InMemoryTimeBlockStore::new();
        assert_eq!(store.find_active("w-001").unwrap(), None);
    }

    #[test]
    fn test_second_active_block_rejected() {
        let store = InMemoryTimeBlockStore::new();
        let first = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));
        let second = TimeBlock::open("w-001", 2, make_datetime("2026-01-15", "09:00:00"));

        store.save(&first).unwrap();
        let result = store.save(&second);

        assert!(matches!(
            result,
            Err(StoreError::ActiveBlockExists { worker_id }) if worker_id == "w-001"
        ));
        // The losing save wrote nothing
        assert_eq!(store.find_by_date("w-001", make_date("2026-01-15")).unwrap().len(), 1);
    }

    #[test]
    fn test_active_blocks_for_different_workers_coexist() {
        let store = InMemoryTimeBlockStore::new();
        let a = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));
        let b = TimeBlock::open("w-002", 1, make_datetime("2026-01-15", "08:00:00"));

        store.save(&a).unwrap();
        store.save(&b).unwrap();

        assert!(store.find_active("w-001").unwrap().is_some());
        assert!(store.find_active("w-002").unwrap().is_some());
    }

    #[test]
    fn test_closed_block_can_be_saved_alongside_active() {
        let store = InMemoryTimeBlockStore::new();
        let mut closed = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));
        closed.close(make_datetime("2026-01-15", "12:00:00"));
        let open = TimeBlock::open("w-001", 2, make_datetime("2026-01-15", "13:00:00"));

        store.save(&open).unwrap();
        store.save(&closed).unwrap();
    }

    #[test]
    fn test_update_replaces_block() {
        let store = InMemoryTimeBlockStore::new();
        let mut block = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));
        store.save(&block).unwrap();

        block.close(make_datetime("2026-01-15", "16:00:00"));
        store.update(&block).unwrap();

        assert_eq!(store.find_active("w-001").unwrap(), None);
        let blocks = store.find_by_date("w-001", make_date("2026-01-15")).unwrap();
        assert!(!blocks[0].is_active);
    }

    #[test]
    fn test_update_unknown_block_fails() {
        let store = InMemoryTimeBlockStore::new();
        let block = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "08:00:00"));

        let result = store.update(&block);
        assert!(matches!(result, Err(StoreError::RecordNotFound { .. })));
    }

    #[test]
    fn test_find_by_date_orders_by_block_number() {
        let store = InMemoryTimeBlockStore::new();
        let mut first = TimeBlock::open("w-001", 1, make_datetime("2026-01-15", "07:00:00"));
        first.close(make_datetime("2026-01-15", "10:00:00"));
        let mut second = TimeBlock::open("w-001", 2, make_datetime("2026-01-15", "13:00:00"));
        second.close(make_datetime("2026-01-15", "17:00:00"));

        // Save out of order; reads come back sorted
        store.save(&second).unwrap();
        store.save(&first).unwrap();

        let blocks = store.find_by_date("w-001", make_date("2026-01-15")).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].block_number, 1);
        assert_eq!(blocks[1].block_number, 2);
    }

    #[test]
    fn test_find_by_date_range_is_half_open() {
        let store = InMemoryTimeBlockStore::new();
        for day in ["2026-01-12", "2026-01-15", "2026-01-19"] {
            let mut block = TimeBlock::open("w-001", 1, make_datetime(day, "08:00:00"));
            block.close(make_datetime(day, "16:00:00"));
            store.save(&block).unwrap();
        }

        let blocks = store
            .find_by_date_range("w-001", make_date("2026-01-12"), make_date("2026-01-19"))
            .unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].date, make_date("2026-01-12"));
        assert_eq!(blocks[1].date, make_date("2026-01-15"));
    }

    #[test]
    fn test_segment_save_and_find() {
        let store = InMemoryWorkSegmentStore::new();
        let segment = WorkSegment::start(
            "wo-001",
            make_datetime("2026-01-15", "08:00:00"),
            3,
            vec![],
        );
        store.save(&segment).unwrap();

        assert_eq!(store.find(segment.id).unwrap(), Some(segment));
    }

    #[test]
    fn test_segment_update_unknown_fails() {
        let store = InMemoryWorkSegmentStore::new();
        let segment = WorkSegment::start(
            "wo-001",
            make_datetime("2026-01-15", "08:00:00"),
            3,
            vec![],
        );

        assert!(matches!(
            store.update(&segment),
            Err(StoreError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_find_by_work_order_orders_by_start_time() {
        let store = InMemoryWorkSegmentStore::new();
        let later = WorkSegment::start("wo-001", make_datetime("2026-01-15", "13:00:00"), 2, vec![]);
        let earlier = WorkSegment::start("wo-001", make_datetime("2026-01-15", "08:00:00"), 5, vec![]);
        let other = WorkSegment::start("wo-002", make_datetime("2026-01-15", "09:00:00"), 1, vec![]);

        store.save(&later).unwrap();
        store.save(&earlier).unwrap();
        store.save(&other).unwrap();

        let segments = store.find_by_work_order("wo-001").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].id, earlier.id);
        assert_eq!(segments[1].id, later.id);
    }
}
