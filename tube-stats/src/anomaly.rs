//! Z-score anomaly detection over a metric series.
//!
//! A value is anomalous when its absolute z-score `|value - mean| / std_dev`
//! is at least the threshold. Mean and standard deviation are the population
//! statistics produced by [`calculate_metrics`](crate::calculate_metrics).
//! A series without spread has no anomalies.
//!
//! Note that a single spike among `n` equal values has a z-score of exactly
//! `sqrt(n - 1)`, which is why the comparison is inclusive.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{validate_threshold, AnalysisConfig};
use crate::descriptive::compute_metrics;
use crate::error::StatsResult;

pub use crate::config::DEFAULT_Z_THRESHOLD;

/// A value flagged by z-score detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZScoreAnomaly {
    /// Position of the value in the input series.
    pub index: usize,
    /// The flagged value.
    pub value: f64,
    /// Absolute z-score of the value.
    pub z_score: f64,
}

/// Returns the indices of values whose absolute z-score is at least `threshold`.
///
/// Use [`DEFAULT_Z_THRESHOLD`] for the dashboard's default of two standard
/// deviations.
///
/// # Errors
///
/// Fails like [`calculate_metrics`](crate::calculate_metrics) on empty or
/// non-finite input, and with
/// [`StatsError::InvalidConfiguration`](crate::StatsError::InvalidConfiguration)
/// when the threshold is negative or not finite.
///
/// # Example
///
/// ```rust
/// use tube_stats::{detect_anomalies, DEFAULT_Z_THRESHOLD};
///
/// let anomalies = detect_anomalies(&[1.0, 1.0, 1.0, 1.0, 100.0], DEFAULT_Z_THRESHOLD).unwrap();
/// assert_eq!(anomalies, vec![4]);
/// ```
pub fn detect_anomalies(data: &[f64], threshold: f64) -> StatsResult<Vec<usize>> {
    Ok(score_anomalies(data, threshold)?
        .into_iter()
        .map(|anomaly| anomaly.index)
        .collect())
}

/// Like [`detect_anomalies`], but returns each flagged value with its z-score.
pub fn score_anomalies(data: &[f64], threshold: f64) -> StatsResult<Vec<ZScoreAnomaly>> {
    compute_anomalies(data, threshold, &AnalysisConfig::default())
}

#[instrument(skip(data, config), fields(len = data.len()))]
pub(crate) fn compute_anomalies(
    data: &[f64],
    threshold: f64,
    config: &AnalysisConfig,
) -> StatsResult<Vec<ZScoreAnomaly>> {
    validate_threshold(threshold, "threshold")?;
    let metrics = compute_metrics(data, config)?;

    // Exact: min and max are taken from the sorted input.
    if metrics.range == 0.0 {
        debug!("Series has no spread, no value can be anomalous");
        return Ok(Vec::new());
    }

    let anomalies: Vec<ZScoreAnomaly> = data
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            let z_score = ((value - metrics.mean) / metrics.standard_deviation).abs();
            (z_score >= threshold).then_some(ZScoreAnomaly {
                index,
                value,
                z_score,
            })
        })
        .collect();

    debug!(
        mean = metrics.mean,
        std_dev = metrics.standard_deviation,
        anomaly_count = anomalies.len(),
        "Completed z-score anomaly detection"
    );

    Ok(anomalies)
}
