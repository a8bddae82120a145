//! Configuration types for hour accounting.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_WEEKLY_OVERTIME_THRESHOLD};

/// Thresholds and rates governing hour aggregation.
///
/// Loaded from `timeclock.yaml` by [`super::ConfigLoader`]; the `Default`
/// implementation provides the standard 8-hour daily and 40-hour weekly
/// thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Hours per day beyond which a day's entry records overtime.
    pub daily_overtime_threshold: Decimal,
    /// Hours per Monday–Sunday week beyond which hours count as overtime.
    pub weekly_overtime_threshold: Decimal,
    /// Hourly rate used for payroll estimates when the caller supplies
    /// none. Pay-rate lookup proper is a downstream concern; this is only
    /// a pass-through multiplier.
    pub default_hourly_rate: Decimal,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            daily_overtime_threshold: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            weekly_overtime_threshold: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
            default_hourly_rate: Decimal::from_parts(2500, 0, 0, false, 2), // 25.00
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_thresholds() {
        let config = TrackingConfig::default();
        assert_eq!(config.daily_overtime_threshold, Decimal::from_str("8").unwrap());
        assert_eq!(config.weekly_overtime_threshold, Decimal::from_str("40").unwrap());
        assert_eq!(config.default_hourly_rate, Decimal::from_str("25.00").unwrap());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
daily_overtime_threshold: "10"
weekly_overtime_threshold: "44"
default_hourly_rate: "18.50"
"#;
        let config: TrackingConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.daily_overtime_threshold, Decimal::from_str("10").unwrap());
        assert_eq!(config.weekly_overtime_threshold, Decimal::from_str("44").unwrap());
        assert_eq!(config.default_hourly_rate, Decimal::from_str("18.50").unwrap());
    }
}
