//! Clock state machine for individual workers.
//!
//! Each worker is either clocked out or clocked in; clocking in opens a new
//! [`TimeBlock`](crate::models::TimeBlock) and clocking out closes it. The
//! one-open-block-per-worker invariant is enforced here together with the
//! store's atomic insert.

mod service;

pub use service::TimeClock;
