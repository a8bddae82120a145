//! Worker Time Tracking & Crew-Hour Accounting Engine
//!
//! This crate records when laborers clock in and out, enforces consistent
//! clock state per worker, values crew tasks by headcount-multiplied labor
//! hours, and folds completed time blocks into weekly and payroll-period
//! totals with daily and weekly overtime splits.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod segments;
pub mod store;
