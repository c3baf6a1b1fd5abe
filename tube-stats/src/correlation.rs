//! Pearson correlation between two metric series.

use tracing::{debug, instrument};

use crate::config::AnalysisConfig;
use crate::error::{ensure_finite, StatsError, StatsResult};
use crate::types::{CorrelationDirection, CorrelationResult, Strength};

/// Running sums over paired observations.
///
/// Shared by the correlation and least-squares computations, which both use
/// the sum-of-products formulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PairSums {
    pub n: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
}

impl PairSums {
    /// Accumulates the sums over `(x, y)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut sums = Self::default();
        for (x, y) in pairs {
            sums.n += 1.0;
            sums.sum_x += x;
            sums.sum_y += y;
            sums.sum_xy += x * y;
            sums.sum_x2 += x * x;
            sums.sum_y2 += y * y;
        }
        sums
    }

    /// `nΣxy − ΣxΣy`
    pub fn covariance_term(&self) -> f64 {
        self.n * self.sum_xy - self.sum_x * self.sum_y
    }

    /// `nΣx² − (Σx)²`
    pub fn x_variance_term(&self) -> f64 {
        self.n * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// `nΣy² − (Σy)²`
    pub fn y_variance_term(&self) -> f64 {
        self.n * self.sum_y2 - self.sum_y * self.sum_y
    }
}

/// Whether every value equals the first. Empty input counts as constant.
///
/// Decided on the inputs rather than on the accumulated sums, which rarely
/// cancel to exactly zero for repeated non-integral values.
pub(crate) fn all_equal(mut values: impl Iterator<Item = f64>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}

/// Computes the Pearson correlation coefficient of two equal-length series.
///
/// When either series has no variance (including empty input) the
/// coefficient is `0`.
///
/// # Errors
///
/// Returns [`StatsError::DimensionMismatch`] when the lengths differ and
/// [`StatsError::InvalidInput`] when either series contains NaN/infinite values.
///
/// # Example
///
/// ```rust
/// use tube_stats::{calculate_correlation, CorrelationDirection, Strength};
///
/// let result = calculate_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(result.correlation, 1.0);
/// assert_eq!(result.strength, Strength::Strong);
/// assert_eq!(result.direction, CorrelationDirection::Positive);
/// ```
pub fn calculate_correlation(x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
    compute_correlation(x, y, &AnalysisConfig::default())
}

#[instrument(skip(x, y, config), fields(len = x.len()))]
pub(crate) fn compute_correlation(
    x: &[f64],
    y: &[f64],
    config: &AnalysisConfig,
) -> StatsResult<CorrelationResult> {
    if x.len() != y.len() {
        return Err(StatsError::dimension_mismatch(x.len(), y.len()));
    }
    ensure_finite(x, "First series")?;
    ensure_finite(y, "Second series")?;

    let sums = PairSums::from_pairs(x.iter().copied().zip(y.iter().copied()));

    let numerator = sums.covariance_term();
    let denominator = (sums.x_variance_term() * sums.y_variance_term()).sqrt();

    let flat = all_equal(x.iter().copied()) || all_equal(y.iter().copied());
    let correlation = if flat || denominator == 0.0 || !denominator.is_finite() {
        debug!("Series without variance, correlation defaults to 0");
        0.0
    } else {
        // Rounding in the sum-of-products form can push |r| marginally past 1.
        (numerator / denominator).clamp(-1.0, 1.0)
    };

    debug!(correlation, "Computed Pearson correlation");

    Ok(CorrelationResult {
        correlation,
        strength: Strength::classify(correlation.abs(), config),
        direction: CorrelationDirection::from_coefficient(correlation),
    })
}
