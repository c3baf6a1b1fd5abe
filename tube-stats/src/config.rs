//! Tunable thresholds for the statistics engine.
//!
//! The defaults reproduce the classification rules used by the analytics
//! dashboard. Configurations can be built in code or loaded from JSON:
//!
//! ```rust
//! use tube_stats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_json(r#"{"anomalyZThreshold": 3.0}"#).unwrap();
//! assert_eq!(config.anomaly_z_threshold, 3.0);
//! assert_eq!(config.strong_threshold, 0.7);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Default z-score threshold for anomaly detection.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Thresholds used to classify correlations, trends, outliers and anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Minimum magnitude classified as a strong relationship.
    pub strong_threshold: f64,
    /// Minimum magnitude classified as a moderate relationship.
    pub moderate_threshold: f64,
    /// Slopes with a smaller magnitude are reported as stable.
    pub stable_slope_threshold: f64,
    /// Multiplier applied to the IQR to build the outlier fences.
    pub outlier_iqr_multiplier: f64,
    /// Absolute z-score at or above which a value is flagged as anomalous.
    pub anomaly_z_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.7,
            moderate_threshold: 0.3,
            stable_slope_threshold: 0.01,
            outlier_iqr_multiplier: 1.5,
            anomaly_z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from JSON, filling missing keys with defaults.
    pub fn from_json(json: &str) -> StatsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the strong/moderate classification thresholds.
    pub fn with_strength_thresholds(mut self, strong: f64, moderate: f64) -> Self {
        self.strong_threshold = strong;
        self.moderate_threshold = moderate;
        self
    }

    /// Sets the slope magnitude below which a trend is stable.
    pub fn with_stable_slope_threshold(mut self, threshold: f64) -> Self {
        self.stable_slope_threshold = threshold;
        self
    }

    /// Sets the IQR multiplier for outlier detection.
    pub fn with_outlier_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.outlier_iqr_multiplier = multiplier;
        self
    }

    /// Sets the z-score threshold for anomaly detection.
    pub fn with_anomaly_z_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_z_threshold = threshold;
        self
    }

    /// Checks that every threshold is finite and non-negative and that the
    /// moderate threshold does not exceed the strong one.
    pub fn validate(&self) -> StatsResult<()> {
        validate_threshold(self.strong_threshold, "strong_threshold")?;
        validate_threshold(self.moderate_threshold, "moderate_threshold")?;
        validate_threshold(self.stable_slope_threshold, "stable_slope_threshold")?;
        validate_threshold(self.outlier_iqr_multiplier, "outlier_iqr_multiplier")?;
        validate_threshold(self.anomaly_z_threshold, "anomaly_z_threshold")?;

        if self.moderate_threshold > self.strong_threshold {
            return Err(StatsError::invalid_config(format!(
                "moderate_threshold ({}) must not exceed strong_threshold ({})",
                self.moderate_threshold, self.strong_threshold
            )));
        }
        Ok(())
    }
}

/// Validates that a threshold is finite and non-negative.
pub(crate) fn validate_threshold(value: f64, name: &str) -> StatsResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(StatsError::invalid_config(format!(
            "{name} must be finite and non-negative, got: {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.strong_threshold, 0.7);
        assert_eq!(config.moderate_threshold, 0.3);
        assert_eq!(config.stable_slope_threshold, 0.01);
        assert_eq!(config.outlier_iqr_multiplier, 1.5);
        assert_eq!(config.anomaly_z_threshold, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = AnalysisConfig::default()
            .with_strength_thresholds(0.8, 0.4)
            .with_stable_slope_threshold(0.5)
            .with_outlier_iqr_multiplier(3.0)
            .with_anomaly_z_threshold(3.0);

        assert_eq!(config.strong_threshold, 0.8);
        assert_eq!(config.moderate_threshold, 0.4);
        assert_eq!(config.stable_slope_threshold, 0.5);
        assert_eq!(config.outlier_iqr_multiplier, 3.0);
        assert_eq!(config.anomaly_z_threshold, 3.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AnalysisConfig::default().with_anomaly_z_threshold(f64::NAN);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must be finite"));

        let config = AnalysisConfig::default().with_outlier_iqr_multiplier(-1.0);
        assert!(config.validate().is_err());

        let config = AnalysisConfig::default().with_strength_thresholds(0.3, 0.7);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalysisConfig::from_json(r#"{"strongThreshold": 0.9}"#).unwrap();
        assert_eq!(config.strong_threshold, 0.9);
        assert_eq!(config.moderate_threshold, 0.3);

        assert!(matches!(
            AnalysisConfig::from_json("{"),
            Err(StatsError::Serialization(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json(r#"{"anomalyZThreshold": -2.0}"#),
            Err(StatsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keys() {
        let json = serde_json::to_value(AnalysisConfig::default()).unwrap();
        assert_eq!(json["stableSlopeThreshold"], 0.01);
        assert_eq!(json["outlierIqrMultiplier"], 1.5);
    }
}
