//! Configurable entry point to the statistics routines.

use crate::anomaly::{compute_anomalies, ZScoreAnomaly};
use crate::config::AnalysisConfig;
use crate::correlation::compute_correlation;
use crate::descriptive::compute_metrics;
use crate::error::StatsResult;
use crate::trend::compute_trend;
use crate::types::{CorrelationResult, DescriptiveMetrics, TimeSeriesPoint, TrendResult};

/// Runs the statistics routines with a fixed [`AnalysisConfig`].
///
/// The engine holds no mutable state; it is `Copy` and can be shared freely
/// across threads. The crate-level free functions behave exactly like
/// `StatisticsEngine::default()`.
///
/// # Example
///
/// ```rust
/// use tube_stats::{AnalysisConfig, StatisticsEngine};
///
/// let engine = StatisticsEngine::with_config(
///     AnalysisConfig::default().with_anomaly_z_threshold(1.5),
/// )
/// .unwrap();
/// let anomalies = engine.detect_anomalies(&[10.0, 11.0, 9.0, 10.0, 25.0]).unwrap();
/// assert_eq!(anomalies, vec![4]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatisticsEngine {
    config: AnalysisConfig,
}

impl StatisticsEngine {
    /// Creates an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom thresholds after validating them.
    pub fn with_config(config: AnalysisConfig) -> StatsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// See [`calculate_metrics`](crate::calculate_metrics).
    pub fn calculate_metrics(&self, data: &[f64]) -> StatsResult<DescriptiveMetrics> {
        compute_metrics(data, &self.config)
    }

    /// See [`calculate_correlation`](crate::calculate_correlation).
    pub fn calculate_correlation(&self, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
        compute_correlation(x, y, &self.config)
    }

    /// See [`analyze_trend`](crate::analyze_trend).
    pub fn analyze_trend(&self, points: &[TimeSeriesPoint]) -> StatsResult<TrendResult> {
        compute_trend(points, &self.config)
    }

    /// Detects anomalies using the configured z-score threshold.
    pub fn detect_anomalies(&self, data: &[f64]) -> StatsResult<Vec<usize>> {
        Ok(self
            .score_anomalies(data)?
            .into_iter()
            .map(|anomaly| anomaly.index)
            .collect())
    }

    /// Scores anomalies using the configured z-score threshold.
    pub fn score_anomalies(&self, data: &[f64]) -> StatsResult<Vec<ZScoreAnomaly>> {
        compute_anomalies(data, self.config.anomaly_z_threshold, &self.config)
    }
}
