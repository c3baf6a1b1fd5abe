//! Growth, velocity and market share scalars.
//!
//! These functions never fail: degenerate denominators resolve to fixed
//! fallback values documented on each function.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{ensure_finite, StatsResult};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Percentage change from `previous` to `current`.
///
/// With a zero baseline the result is `100` when `current` is positive and
/// `0` otherwise.
///
/// ```rust
/// use tube_stats::calculate_growth_rate;
///
/// assert_eq!(calculate_growth_rate(150.0, 100.0), 50.0);
/// assert_eq!(calculate_growth_rate(50.0, 0.0), 100.0);
/// assert_eq!(calculate_growth_rate(0.0, 0.0), 0.0);
/// ```
pub fn calculate_growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

/// Compound annual growth rate in percent.
///
/// Returns `0` when `begin <= 0` or `years <= 0`.
pub fn calculate_cagr(begin: f64, end: f64, years: f64) -> f64 {
    if begin <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((end / begin).powf(1.0 / years) - 1.0) * 100.0
}

/// Change in trending score per hour.
///
/// Returns `0` when `time_diff_hours` is zero.
pub fn calculate_trending_velocity(
    current_score: f64,
    previous_score: f64,
    time_diff_hours: f64,
) -> f64 {
    if time_diff_hours == 0.0 {
        return 0.0;
    }
    (current_score - previous_score) / time_diff_hours
}

/// Trending velocity between two observations, taking the elapsed hours from
/// their timestamps. Sub-hour gaps count as fractional hours.
pub fn trending_velocity_between(
    current_score: f64,
    previous_score: f64,
    current_at: DateTime<Utc>,
    previous_at: DateTime<Utc>,
) -> f64 {
    let elapsed = current_at.signed_duration_since(previous_at);
    let hours = elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR;
    calculate_trending_velocity(current_score, previous_score, hours)
}

/// A channel's share of total market views, in percent.
///
/// Returns `0` when the market total is zero.
pub fn calculate_market_share(channel_views: f64, total_market_views: f64) -> f64 {
    if total_market_views == 0.0 {
        return 0.0;
    }
    channel_views / total_market_views * 100.0
}

/// Market share of every entry relative to the sum of all entries.
pub fn market_shares(channel_views: &[f64]) -> StatsResult<Vec<f64>> {
    ensure_finite(channel_views, "Channel views")?;
    let total: f64 = channel_views.iter().sum();
    Ok(channel_views
        .iter()
        .map(|&views| calculate_market_share(views, total))
        .collect())
}

/// Growth rate from the first to the last value of a chronologically
/// ordered series, or `None` when the series has fewer than two values.
pub fn period_growth(series: &[f64]) -> Option<f64> {
    match series {
        [first, .., last] => {
            let growth = calculate_growth_rate(*last, *first);
            debug!(first, last, growth, "Computed period growth");
            Some(growth)
        }
        _ => None,
    }
}
