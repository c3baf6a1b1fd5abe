//! Prelude for commonly used types and functions in tube-stats.

pub use crate::anomaly::{detect_anomalies, DEFAULT_Z_THRESHOLD};
pub use crate::config::AnalysisConfig;
pub use crate::correlation::calculate_correlation;
pub use crate::descriptive::calculate_metrics;
pub use crate::engine::StatisticsEngine;
pub use crate::error::{StatsError, StatsResult};
pub use crate::trend::{analyze_trend, series_from_values};
pub use crate::types::{
    CorrelationDirection, CorrelationResult, DescriptiveMetrics, Strength, TimeSeriesPoint,
    TrendDirection, TrendResult,
};
