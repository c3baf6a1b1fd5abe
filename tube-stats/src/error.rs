//! Error types for the statistics engine.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while computing statistics.
///
/// Every variant describes a caller contract violation detected before any
/// computation starts. Degenerate but valid numeric cases (zero variance,
/// zero denominators) are never reported as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The dataset is empty or contains values for which statistics are undefined.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Paired inputs have different lengths.
    #[error("Dimension mismatch: left series has {left} values, right series has {right}")]
    DimensionMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Not enough points for the requested analysis.
    #[error("Insufficient data: at least {required} points required, got {actual}")]
    InsufficientData {
        /// Minimum number of points the analysis needs.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Invalid configuration or threshold.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StatsError {
    /// Creates an invalid input error with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an invalid configuration error with the given message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a dimension mismatch error for two series lengths.
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    /// Creates an insufficient data error.
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

/// Converts serde_json errors to StatsError.
impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Rejects empty datasets.
pub(crate) fn ensure_non_empty(data: &[f64], what: &str) -> StatsResult<()> {
    if data.is_empty() {
        return Err(StatsError::invalid_input(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// Rejects datasets containing NaN or infinite values.
pub(crate) fn ensure_finite(data: &[f64], what: &str) -> StatsResult<()> {
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::invalid_input(format!(
            "{what} contains a non-finite value at index {index}"
        )));
    }
    Ok(())
}
