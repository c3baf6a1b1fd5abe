//! # tube-stats - Statistics for video analytics
//!
//! `tube-stats` is the numeric core of a video analytics dashboard. It turns
//! raw per-video metric series (views, likes, comments, engagement rate,
//! trending score) into summary statistics, correlations, trend fits, growth
//! rates, anomaly flags and composite scores.
//!
//! The engine is pure: every function reads its arguments, allocates fresh
//! results and touches no shared state, so calls can run concurrently from any
//! number of threads. Fetching, storing and rendering the data are left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use tube_stats::prelude::*;
//!
//! # fn main() -> tube_stats::StatsResult<()> {
//! let views = [1200.0, 3400.0, 2100.0, 56000.0, 1800.0];
//! let likes = [80.0, 210.0, 150.0, 2900.0, 95.0];
//!
//! let metrics = calculate_metrics(&views)?;
//! println!("median views: {}", metrics.median);
//!
//! let correlation = calculate_correlation(&views, &likes)?;
//! assert_eq!(correlation.strength, Strength::Strong);
//!
//! let trend = analyze_trend(&series_from_values(&likes))?;
//! println!("likes are {} ({})", trend.direction, trend.strength);
//!
//! let spikes = detect_anomalies(&views, DEFAULT_Z_THRESHOLD)?;
//! println!("anomalous uploads: {spikes:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - **`descriptive`**: mean, median, mode, variance, quartiles and IQR outliers
//! - **`correlation`**: Pearson correlation with strength/direction labels
//! - **`trend`**: least-squares trend fits over time-indexed points
//! - **`growth`**: growth rate, CAGR, trending velocity and market share
//! - **`engagement`**: engagement score, engagement rate, trending score and tiers
//! - **`anomaly`**: z-score anomaly detection
//! - **`dashboard`**: aggregated analyses combining the routines above
//! - **`config`**: tunable classification thresholds
//! - **`engine`**: [`StatisticsEngine`], the routines bound to a configuration
//! - **`logging`**: subscriber setup for applications
//!
//! ## Errors
//!
//! Contract violations (empty data, mismatched lengths, too few trend points)
//! are reported as [`StatsError`]. Degenerate but valid inputs, such as a
//! series without variance, resolve to documented fallback values instead.

pub mod anomaly;
pub mod config;
pub mod correlation;
pub mod dashboard;
pub mod descriptive;
pub mod engagement;
pub mod engine;
pub mod error;
pub mod growth;
pub mod logging;
pub mod prelude;
pub mod trend;
pub mod types;

pub use anomaly::{detect_anomalies, score_anomalies, ZScoreAnomaly, DEFAULT_Z_THRESHOLD};
pub use config::AnalysisConfig;
pub use correlation::calculate_correlation;
pub use descriptive::calculate_metrics;
pub use engagement::{
    calculate_engagement_rate, calculate_engagement_score, calculate_trending_score,
    EngagementBreakdown, EngagementTier,
};
pub use engine::StatisticsEngine;
pub use error::{StatsError, StatsResult};
pub use growth::{
    calculate_cagr, calculate_growth_rate, calculate_market_share, calculate_trending_velocity,
    market_shares, period_growth, trending_velocity_between,
};
pub use trend::{analyze_trend, series_from_timestamped, series_from_values, TimestampedValue};
pub use types::{
    CorrelationDirection, CorrelationResult, DescriptiveMetrics, Quartiles, Strength,
    TimeSeriesPoint, TrendDirection, TrendResult,
};
