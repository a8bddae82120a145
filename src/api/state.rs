//! Application state for the Time Tracking Engine API.
//!
//! This module defines the shared application state that is available to
//! all request handlers. Service instances are constructed here and passed
//! in explicitly; there is no global singleton.

use std::sync::Arc;

use crate::clock::TimeClock;
use crate::config::TrackingConfig;
use crate::reporting::ReportEngine;
use crate::segments::SegmentTracker;
use crate::store::{
    InMemoryTimeBlockStore, InMemoryWorkSegmentStore, TimeBlockRepository, WorkSegmentRepository,
};

/// Shared application state.
///
/// Owns the engine services; the clock and the report engine share one
/// time block repository so reports see every recorded block.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<TimeClock>,
    segments: Arc<SegmentTracker>,
    reports: Arc<ReportEngine>,
}

impl AppState {
    /// Creates application state over the given repositories.
    pub fn new(
        blocks: Arc<dyn TimeBlockRepository>,
        segments: Arc<dyn WorkSegmentRepository>,
        config: TrackingConfig,
    ) -> Self {
        Self {
            clock: Arc::new(TimeClock::new(blocks.clone())),
            segments: Arc::new(SegmentTracker::new(segments)),
            reports: Arc::new(ReportEngine::new(blocks, config)),
        }
    }

    /// Creates application state backed by fresh in-memory stores.
    pub fn in_memory(config: TrackingConfig) -> Self {
        Self::new(
            Arc::new(InMemoryTimeBlockStore::new()),
            Arc::new(InMemoryWorkSegmentStore::new()),
            config,
        )
    }

    /// Returns the clock service.
    pub fn clock(&self) -> &TimeClock {
        &self.clock
    }

    /// Returns the segment tracker.
    pub fn segments(&self) -> &SegmentTracker {
        &self.segments
    }

    /// Returns the report engine.
    pub fn reports(&self) -> &ReportEngine {
        &self.reports
    }
}
