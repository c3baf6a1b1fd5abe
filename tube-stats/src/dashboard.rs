//! Aggregated statistics for the analytics dashboard.
//!
//! These helpers combine the core routines the way the dashboard views use
//! them: per-metric summaries over a set of videos, pairwise correlations
//! between views, likes and comments, and trends over ordered samples or
//! period totals.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::engagement::{calculate_engagement_rate, calculate_trending_score, EngagementBreakdown};
use crate::engine::StatisticsEngine;
use crate::error::{StatsError, StatsResult};
use crate::growth::period_growth;
use crate::trend::{series_from_values, MIN_TREND_POINTS};
use crate::types::{CorrelationResult, DescriptiveMetrics, TrendResult};

/// Raw and derived metrics of a single video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSample {
    pub view_count: f64,
    pub like_count: f64,
    pub comment_count: f64,
    pub engagement_rate: f64,
    pub trending_score: f64,
}

impl VideoSample {
    /// Builds a sample from raw counts, deriving engagement rate and trending score.
    pub fn from_counts(views: f64, likes: f64, comments: f64) -> Self {
        Self {
            view_count: views,
            like_count: likes,
            comment_count: comments,
            engagement_rate: calculate_engagement_rate(views, likes, comments),
            trending_score: calculate_trending_score(views, likes, comments),
        }
    }
}

/// Descriptive metrics for each video metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummaries {
    pub views: DescriptiveMetrics,
    pub likes: DescriptiveMetrics,
    pub comments: DescriptiveMetrics,
    pub engagement: DescriptiveMetrics,
    pub trending: DescriptiveMetrics,
}

/// Pairwise correlations between the raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountCorrelations {
    pub view_like: CorrelationResult,
    pub view_comment: CorrelationResult,
    pub like_comment: CorrelationResult,
}

/// Trends over the sample order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleTrends {
    /// Engagement rate trend; `None` with fewer than two samples.
    pub engagement: Option<TrendResult>,
}

/// Full statistical analysis of a set of videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalysis {
    pub metrics: MetricSummaries,
    pub correlations: CountCorrelations,
    pub trends: SampleTrends,
    pub engagement_breakdown: EngagementBreakdown,
}

impl DashboardAnalysis {
    /// Analyzes samples with the default engine. Samples are expected in
    /// publication order, which the engagement trend uses as its x axis.
    pub fn from_samples(samples: &[VideoSample]) -> StatsResult<Self> {
        Self::from_samples_with(&StatisticsEngine::default(), samples)
    }

    /// Analyzes samples with a configured engine.
    #[instrument(skip(engine, samples), fields(samples = samples.len()))]
    pub fn from_samples_with(
        engine: &StatisticsEngine,
        samples: &[VideoSample],
    ) -> StatsResult<Self> {
        if samples.is_empty() {
            return Err(StatsError::invalid_input(
                "Dashboard analysis requires at least one video sample",
            ));
        }

        let views: Vec<f64> = samples.iter().map(|s| s.view_count).collect();
        let likes: Vec<f64> = samples.iter().map(|s| s.like_count).collect();
        let comments: Vec<f64> = samples.iter().map(|s| s.comment_count).collect();
        let engagement: Vec<f64> = samples.iter().map(|s| s.engagement_rate).collect();
        let trending: Vec<f64> = samples.iter().map(|s| s.trending_score).collect();

        let metrics = MetricSummaries {
            views: engine.calculate_metrics(&views)?,
            likes: engine.calculate_metrics(&likes)?,
            comments: engine.calculate_metrics(&comments)?,
            engagement: engine.calculate_metrics(&engagement)?,
            trending: engine.calculate_metrics(&trending)?,
        };

        let correlations = CountCorrelations {
            view_like: engine.calculate_correlation(&views, &likes)?,
            view_comment: engine.calculate_correlation(&views, &comments)?,
            like_comment: engine.calculate_correlation(&likes, &comments)?,
        };

        let trends = SampleTrends {
            engagement: optional_trend(engine, &engagement)?,
        };

        info!(samples = samples.len(), "Completed dashboard analysis");

        Ok(Self {
            metrics,
            correlations,
            trends,
            engagement_breakdown: EngagementBreakdown::from_rates(&engagement),
        })
    }
}

/// Aggregated totals of one channel over the comparison window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTotals {
    pub total_views: f64,
    pub total_likes: f64,
    pub avg_engagement: f64,
}

/// Distribution of channel totals across the compared channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStatistics {
    pub views: DescriptiveMetrics,
    pub likes: DescriptiveMetrics,
    pub engagement: DescriptiveMetrics,
}

impl ComparisonStatistics {
    /// Summarizes totals across channels. Fails with `InvalidInput` when no
    /// channel is given.
    pub fn from_channels(channels: &[ChannelTotals]) -> StatsResult<Self> {
        Self::from_channels_with(&StatisticsEngine::default(), channels)
    }

    /// Summarizes totals across channels with a configured engine.
    pub fn from_channels_with(
        engine: &StatisticsEngine,
        channels: &[ChannelTotals],
    ) -> StatsResult<Self> {
        let views: Vec<f64> = channels.iter().map(|c| c.total_views).collect();
        let likes: Vec<f64> = channels.iter().map(|c| c.total_likes).collect();
        let engagement: Vec<f64> = channels.iter().map(|c| c.avg_engagement).collect();

        Ok(Self {
            views: engine.calculate_metrics(&views)?,
            likes: engine.calculate_metrics(&likes)?,
            engagement: engine.calculate_metrics(&engagement)?,
        })
    }
}

/// Trend and growth over chronologically ordered period totals
/// (for example daily view sums).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalTrend {
    /// `None` with fewer than two periods.
    pub trend_analysis: Option<TrendResult>,
    /// Growth from the first to the last period; `None` with fewer than two periods.
    pub growth_rate: Option<f64>,
    pub periods: usize,
}

impl HistoricalTrend {
    /// Analyzes period totals, indexing periods by position.
    pub fn from_buckets(buckets: &[f64]) -> StatsResult<Self> {
        Self::from_buckets_with(&StatisticsEngine::default(), buckets)
    }

    /// Analyzes period totals with a configured engine.
    pub fn from_buckets_with(engine: &StatisticsEngine, buckets: &[f64]) -> StatsResult<Self> {
        Ok(Self {
            trend_analysis: optional_trend(engine, buckets)?,
            growth_rate: period_growth(buckets),
            periods: buckets.len(),
        })
    }
}

fn optional_trend(engine: &StatisticsEngine, values: &[f64]) -> StatsResult<Option<TrendResult>> {
    if values.len() < MIN_TREND_POINTS {
        return Ok(None);
    }
    engine.analyze_trend(&series_from_values(values)).map(Some)
}
