//! Worker roster model.
//!
//! This module defines the Worker struct consumed read-only from the
//! worker directory. The engine references workers by identifier and never
//! manages their lifecycle.

use serde::{Deserialize, Serialize};

/// A worker as known to the worker directory.
///
/// TimeBlocks hold the `id` only; this struct exists so callers can carry
/// roster data (name, active status) alongside engine results. An inactive
/// worker may still close an open block, but callers typically reject new
/// clock-ins for inactive workers upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// The worker's display name.
    pub name: String,
    /// Whether the worker is currently on the active roster.
    pub is_active: bool,
}
