//! Engagement and trending scores for individual videos.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engagement rate at or above which a video counts as highly engaging.
pub const HIGH_ENGAGEMENT_RATE: f64 = 5.0;

/// Engagement rate at or above which a video counts as moderately engaging.
pub const MEDIUM_ENGAGEMENT_RATE: f64 = 2.0;

/// Weighted engagement score per hundred views.
///
/// Comments weigh twice as much as likes and shares three times as much. The
/// view count is floored at 1, so videos without views still get a finite
/// score. A missing or zero share count adds no bonus.
///
/// ```rust
/// use tube_stats::calculate_engagement_score;
///
/// assert_eq!(calculate_engagement_score(1000.0, 40.0, 5.0, None), 5.0);
/// assert_eq!(calculate_engagement_score(1000.0, 40.0, 5.0, Some(10.0)), 8.0);
/// ```
pub fn calculate_engagement_score(
    views: f64,
    likes: f64,
    comments: f64,
    shares: Option<f64>,
) -> f64 {
    let denominator = views.max(1.0);
    let base_score = (likes + comments * 2.0) / denominator * 100.0;
    let share_bonus = match shares {
        Some(shares) if shares != 0.0 && !shares.is_nan() => shares * 3.0 / denominator * 100.0,
        _ => 0.0,
    };
    base_score + share_bonus
}

/// Likes plus comments per hundred views; `0` for videos without views.
pub fn calculate_engagement_rate(views: f64, likes: f64, comments: f64) -> f64 {
    if views <= 0.0 {
        return 0.0;
    }
    (likes + comments) / views * 100.0
}

/// Trending score of a video: `0.1 * views + 2 * likes + 5 * comments`.
pub fn calculate_trending_score(views: f64, likes: f64, comments: f64) -> f64 {
    views * 0.1 + likes * 2.0 + comments * 5.0
}

/// Engagement bucket of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

impl EngagementTier {
    /// Buckets an engagement rate: high from 5%, medium from 2%, low below.
    pub fn classify(engagement_rate: f64) -> Self {
        if engagement_rate >= HIGH_ENGAGEMENT_RATE {
            EngagementTier::High
        } else if engagement_rate >= MEDIUM_ENGAGEMENT_RATE {
            EngagementTier::Medium
        } else {
            EngagementTier::Low
        }
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngagementTier::High => "high",
            EngagementTier::Medium => "medium",
            EngagementTier::Low => "low",
        };
        f.write_str(name)
    }
}

/// Number of videos in each engagement tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementBreakdown {
    pub high_engagement: usize,
    pub medium_engagement: usize,
    pub low_engagement: usize,
    pub total_videos: usize,
}

impl EngagementBreakdown {
    /// Counts the tiers of a set of engagement rates.
    pub fn from_rates(rates: &[f64]) -> Self {
        rates
            .iter()
            .fold(Self::default(), |mut breakdown, &rate| {
                match EngagementTier::classify(rate) {
                    EngagementTier::High => breakdown.high_engagement += 1,
                    EngagementTier::Medium => breakdown.medium_engagement += 1,
                    EngagementTier::Low => breakdown.low_engagement += 1,
                }
                breakdown.total_videos += 1;
                breakdown
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_score() {
        assert_eq!(calculate_engagement_score(1000.0, 40.0, 5.0, None), 5.0);
        assert_eq!(calculate_engagement_score(1000.0, 40.0, 5.0, Some(0.0)), 5.0);
        assert_eq!(calculate_engagement_score(1000.0, 40.0, 5.0, Some(10.0)), 8.0);
        assert_eq!(calculate_engagement_score(400.0, 30.0, 5.0, Some(10.0)), 17.5);
    }

    #[test]
    fn test_engagement_score_floors_views() {
        assert_eq!(calculate_engagement_score(0.0, 1.0, 1.0, None), 300.0);
        assert_eq!(calculate_engagement_score(0.5, 1.0, 0.0, Some(1.0)), 400.0);
    }

    #[test]
    fn test_engagement_rate() {
        assert_eq!(calculate_engagement_rate(1000.0, 40.0, 10.0), 5.0);
        assert_eq!(calculate_engagement_rate(0.0, 40.0, 10.0), 0.0);
    }

    #[test]
    fn test_trending_score() {
        assert_eq!(calculate_trending_score(1000.0, 10.0, 2.0), 130.0);
        assert_eq!(calculate_trending_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(EngagementTier::classify(5.0), EngagementTier::High);
        assert_eq!(EngagementTier::classify(4.99), EngagementTier::Medium);
        assert_eq!(EngagementTier::classify(2.0), EngagementTier::Medium);
        assert_eq!(EngagementTier::classify(1.99), EngagementTier::Low);
        assert_eq!(EngagementTier::High.to_string(), "high");
    }

    #[test]
    fn test_breakdown() {
        let breakdown = EngagementBreakdown::from_rates(&[0.5, 2.5, 7.0, 9.0, 1.0]);
        assert_eq!(
            breakdown,
            EngagementBreakdown {
                high_engagement: 2,
                medium_engagement: 1,
                low_engagement: 2,
                total_videos: 5,
            }
        );
        assert_eq!(EngagementBreakdown::from_rates(&[]), EngagementBreakdown::default());

        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["highEngagement"], 2);
    }
}
