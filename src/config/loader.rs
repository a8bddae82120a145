//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TrackingConfig;

/// Loads and provides access to the engine configuration.
///
/// # File format
///
/// ```text
/// # config/timeclock.yaml
/// daily_overtime_threshold: "8"
/// weekly_overtime_threshold: "40"
/// default_hourly_rate: "25.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timeclock.yaml").unwrap();
/// println!("weekly threshold: {}", loader.config().weekly_overtime_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `ConfigParseError` when it contains invalid YAML or missing fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader carrying the default configuration, for callers
    /// that run without a config file.
    pub fn with_defaults() -> Self {
        Self {
            config: TrackingConfig::default(),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/timeclock.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_config("timeclock_invalid.yaml", "daily_overtime_threshold: [");
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp_config(
            "timeclock_valid.yaml",
            "daily_overtime_threshold: \"8\"\nweekly_overtime_threshold: \"40\"\ndefault_hourly_rate: \"25.00\"\n",
        );
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(
            loader.config().weekly_overtime_threshold,
            Decimal::from_str("40").unwrap()
        );
    }

    #[test]
    fn test_with_defaults_matches_default_config() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(
            loader.config().daily_overtime_threshold,
            Decimal::from_str("8").unwrap()
        );
    }
}
