//! Error types for the Time Tracking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur while recording clock events
//! or aggregating hours.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the Time Tracking Engine.
///
/// Every operation in the engine returns this error type. All variants are
/// ordinary, recoverable return values: there is no fatal class, and no
/// operation partially mutates state before failing.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::AlreadyClockedIn {
///     worker_id: "w-042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Worker 'w-042' is already clocked in");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Clock-in was attempted while the worker already has an active block.
    #[error("Worker '{worker_id}' is already clocked in")]
    AlreadyClockedIn {
        /// The worker who attempted the clock-in.
        worker_id: String,
    },

    /// Clock-out was attempted with no active block for the worker.
    #[error("Worker '{worker_id}' is not clocked in")]
    NotClockedIn {
        /// The worker who attempted the clock-out.
        worker_id: String,
    },

    /// A stored record violates an engine invariant (data corruption).
    ///
    /// Surfaced to the caller, never auto-repaired.
    #[error("Invalid clock state for worker '{worker_id}': {message}")]
    InvalidState {
        /// The worker whose record is inconsistent.
        worker_id: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// A work segment was not found in the store.
    #[error("Work segment '{segment_id}' not found")]
    SegmentNotFound {
        /// The id of the missing segment.
        segment_id: String,
    },

    /// A work segment operation was attempted on an already closed segment.
    #[error("Work segment '{segment_id}' is already closed")]
    SegmentClosed {
        /// The id of the closed segment.
        segment_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The underlying persistence store failed.
    ///
    /// Propagated unchanged; the engine performs no retries.
    #[error("Store error: {source}")]
    Store {
        /// The persistence failure.
        #[from]
        source: StoreError,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
