//! Descriptive statistics for a single metric series.
//!
//! Quartiles follow the median-of-halves convention: the sorted data is split
//! at its midpoint (the middle element of an odd-sized dataset belongs to
//! neither half), `q1`/`q3` are the medians of the lower/upper halves and `q2`
//! is the median of the full dataset. Outliers use Tukey fences built from
//! those quartiles.

use tracing::{debug, instrument};

use crate::config::AnalysisConfig;
use crate::error::{ensure_finite, ensure_non_empty, StatsResult};
use crate::types::{DescriptiveMetrics, Quartiles};

/// Computes descriptive statistics for a non-empty dataset.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`](crate::StatsError::InvalidInput) when
/// `data` is empty or contains NaN/infinite values.
///
/// # Example
///
/// ```rust
/// use tube_stats::calculate_metrics;
///
/// let metrics = calculate_metrics(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
/// assert_eq!(metrics.median, 3.5);
/// assert_eq!(metrics.outliers, vec![100.0]);
/// ```
pub fn calculate_metrics(data: &[f64]) -> StatsResult<DescriptiveMetrics> {
    compute_metrics(data, &AnalysisConfig::default())
}

#[instrument(skip(data, config), fields(len = data.len()))]
pub(crate) fn compute_metrics(
    data: &[f64],
    config: &AnalysisConfig,
) -> StatsResult<DescriptiveMetrics> {
    ensure_non_empty(data, "Dataset")?;
    ensure_finite(data, "Dataset")?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let median = median_of_sorted(&sorted);
    let mode = mode_of_sorted(&sorted);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let standard_deviation = variance.sqrt();

    let quartiles = quartiles_of_sorted(&sorted);
    let outliers = iqr_outliers(data, &quartiles, config.outlier_iqr_multiplier);

    debug!(
        mean,
        median,
        standard_deviation,
        outlier_count = outliers.len(),
        "Computed descriptive metrics"
    );

    Ok(DescriptiveMetrics {
        mean,
        median,
        mode,
        standard_deviation,
        variance,
        min,
        max,
        range: max - min,
        quartiles,
        outliers,
    })
}

/// Median of an ascending, non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value of an ascending, non-empty slice.
///
/// Ties resolve to the smallest of the most frequent values, since runs are
/// visited in ascending order and only a strictly larger count replaces the
/// current mode.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut mode = sorted[0];
    let mut max_count = 0;

    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let count = j - i;
        if count > max_count {
            max_count = count;
            mode = sorted[i];
        }
        i = j;
    }
    mode
}

/// Quartiles of an ascending, non-empty slice.
///
/// A single-element dataset has empty halves; every quartile is then the
/// element itself.
fn quartiles_of_sorted(sorted: &[f64]) -> Quartiles {
    let n = sorted.len();
    let q2 = median_of_sorted(sorted);

    let lower = &sorted[..n / 2];
    let upper = &sorted[(n + 1) / 2..];

    let q1 = if lower.is_empty() {
        q2
    } else {
        median_of_sorted(lower)
    };
    let q3 = if upper.is_empty() {
        q2
    } else {
        median_of_sorted(upper)
    };

    Quartiles { q1, q2, q3 }
}

/// Values strictly outside `[q1 - k*IQR, q3 + k*IQR]`, in input order.
fn iqr_outliers(data: &[f64], quartiles: &Quartiles, multiplier: f64) -> Vec<f64> {
    let iqr = quartiles.iqr();
    let lower_bound = quartiles.q1 - multiplier * iqr;
    let upper_bound = quartiles.q3 + multiplier * iqr;

    data.iter()
        .copied()
        .filter(|&value| value < lower_bound || value > upper_bound)
        .collect()
}
