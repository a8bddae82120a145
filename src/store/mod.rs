//! Persistence layer for the Time Tracking Engine.
//!
//! This module defines the narrow repository contracts the engine consumes
//! and provides in-memory implementations suitable for tests and for
//! single-process deployments.

mod memory;
mod repository;

pub use memory::{InMemoryTimeBlockStore, InMemoryWorkSegmentStore};
pub use repository::{StoreError, TimeBlockRepository, WorkSegmentRepository};
