//! Result records produced by the statistics engine.
//!
//! All records are plain values: they are built fresh by each computation and
//! serialize with camelCase keys so they can be handed straight to a JSON
//! response body.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::AnalysisConfig;

/// Quartiles computed with the median-of-halves convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// Median of the lower half.
    pub q1: f64,
    /// Median of the full dataset.
    pub q2: f64,
    /// Median of the upper half.
    pub q3: f64,
}

impl Quartiles {
    /// Returns the interquartile range `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Descriptive statistics for a single dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveMetrics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median of the sorted data.
    pub median: f64,
    /// Most frequent value.
    pub mode: f64,
    /// Population standard deviation.
    pub standard_deviation: f64,
    /// Population variance.
    pub variance: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Lower, middle and upper quartiles.
    pub quartiles: Quartiles,
    /// Values outside the IQR fences, in input order.
    pub outliers: Vec<f64>,
}

/// Qualitative strength of a correlation or trend fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Classifies a magnitude (absolute correlation or R²) against the
    /// configured thresholds.
    pub fn classify(magnitude: f64, config: &AnalysisConfig) -> Self {
        if magnitude >= config.strong_threshold {
            Strength::Strong
        } else if magnitude >= config.moderate_threshold {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    Positive,
    Negative,
}

impl CorrelationDirection {
    /// Zero counts as positive.
    pub fn from_coefficient(correlation: f64) -> Self {
        if correlation >= 0.0 {
            CorrelationDirection::Positive
        } else {
            CorrelationDirection::Negative
        }
    }
}

/// Pearson correlation between two series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Coefficient in `[-1, 1]`.
    pub correlation: f64,
    pub strength: Strength,
    pub direction: CorrelationDirection,
}

/// Direction of a fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Slopes with a magnitude under the stable threshold are `Stable`.
    pub fn from_slope(slope: f64, config: &AnalysisConfig) -> Self {
        if slope.abs() < config.stable_slope_threshold {
            TrendDirection::Stable
        } else if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Least-squares trend fit over a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub slope: f64,
    pub direction: TrendDirection,
    pub strength: Strength,
    /// Coefficient of determination of the fit.
    pub r_squared: f64,
}

/// A single `(x, y)` observation; `x` is usually an ordinal index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl TimeSeriesPoint {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for TimeSeriesPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
