//! Linear trend analysis over time-indexed points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::AnalysisConfig;
use crate::correlation::{all_equal, PairSums};
use crate::error::{StatsError, StatsResult};
use crate::types::{Strength, TimeSeriesPoint, TrendDirection, TrendResult};

/// Minimum number of points for a least-squares fit.
pub const MIN_TREND_POINTS: usize = 2;

/// A metric value observed at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimestampedValue {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl TimestampedValue {
    /// Creates a new timestamped value.
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Indexes values by position: the i-th value becomes the point `(i, value)`.
pub fn series_from_values(values: &[f64]) -> Vec<TimeSeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| TimeSeriesPoint::new(i as f64, y))
        .collect()
}

/// Orders observations chronologically and indexes them by position.
///
/// Observations sharing a timestamp keep their relative input order.
pub fn series_from_timestamped(values: &[TimestampedValue]) -> Vec<TimeSeriesPoint> {
    let mut ordered = values.to_vec();
    ordered.sort_by_key(|v| v.timestamp);
    ordered
        .iter()
        .enumerate()
        .map(|(i, v)| TimeSeriesPoint::new(i as f64, v.value))
        .collect()
}

/// Fits an ordinary least-squares line through the points.
///
/// Degenerate inputs resolve to fallback values instead of errors: when all
/// `x` coincide the slope is `0`, and when all `y` coincide the fit is exact
/// and `r_squared` is `1`.
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] with fewer than two points and
/// [`StatsError::InvalidInput`] when a coordinate is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use tube_stats::{analyze_trend, TimeSeriesPoint, TrendDirection};
///
/// let points = [
///     TimeSeriesPoint::new(0.0, 1.0),
///     TimeSeriesPoint::new(1.0, 2.0),
///     TimeSeriesPoint::new(2.0, 3.0),
/// ];
/// let trend = analyze_trend(&points).unwrap();
/// assert_eq!(trend.slope, 1.0);
/// assert_eq!(trend.direction, TrendDirection::Increasing);
/// assert_eq!(trend.r_squared, 1.0);
/// ```
pub fn analyze_trend(points: &[TimeSeriesPoint]) -> StatsResult<TrendResult> {
    compute_trend(points, &AnalysisConfig::default())
}

#[instrument(skip(points, config), fields(len = points.len()))]
pub(crate) fn compute_trend(
    points: &[TimeSeriesPoint],
    config: &AnalysisConfig,
) -> StatsResult<TrendResult> {
    if points.len() < MIN_TREND_POINTS {
        return Err(StatsError::insufficient_data(MIN_TREND_POINTS, points.len()));
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(StatsError::invalid_input(format!(
            "Time series contains a non-finite point at index {index}"
        )));
    }

    let sums = PairSums::from_pairs(points.iter().map(|p| (p.x, p.y)));

    let flat_x = all_equal(points.iter().map(|p| p.x));
    let flat_y = all_equal(points.iter().map(|p| p.y));

    // Cancellation in `nΣx² − (Σx)²` can reach zero for large, close x values.
    let x_variance = sums.x_variance_term();
    let slope = if flat_x || flat_y || x_variance <= 0.0 {
        debug!(flat_x, flat_y, "Degenerate series, slope defaults to 0");
        0.0
    } else {
        sums.covariance_term() / x_variance
    };
    let intercept = if flat_y {
        points[0].y
    } else {
        (sums.sum_y - slope * sums.sum_x) / sums.n
    };

    let r_squared = if flat_y {
        debug!("All y values coincide, r_squared defaults to 1");
        1.0
    } else {
        let y_mean = sums.sum_y / sums.n;
        let ss_total: f64 = points.iter().map(|p| (p.y - y_mean).powi(2)).sum();
        let ss_residual: f64 = points
            .iter()
            .map(|p| (p.y - (slope * p.x + intercept)).powi(2))
            .sum();
        1.0 - ss_residual / ss_total
    };

    debug!(slope, intercept, r_squared, "Computed linear trend");

    Ok(TrendResult {
        slope,
        direction: TrendDirection::from_slope(slope, config),
        strength: Strength::classify(r_squared.abs(), config),
        r_squared,
    })
}
