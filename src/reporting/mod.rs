//! Weekly and payroll aggregation.
//!
//! The aggregation engine folds closed time blocks into Monday-aligned
//! weekly reports and arbitrary-interval payroll records.

mod engine;

pub use engine::ReportEngine;
