//! Configuration for the Time Tracking Engine.
//!
//! Overtime thresholds and the default hourly rate load from a YAML file;
//! [`TrackingConfig::default`] supplies the standard values when no file
//! is used.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::TrackingConfig;
