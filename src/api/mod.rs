//! HTTP API module for the Time Tracking Engine.
//!
//! This module provides the REST endpoints wrapping the engine's clock,
//! segment, and reporting operations. The engine itself does not depend on
//! this surface; it exists as a composition root for service deployments.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClockEventRequest, CloseSegmentRequest, CrewChangeRequest, StartSegmentRequest};
pub use response::ApiError;
pub use state::AppState;
