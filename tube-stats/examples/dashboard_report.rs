//! Builds a dashboard report for a handful of uploads and prints it as JSON.
//!
//! Run with `cargo run --example dashboard_report`. Set `RUST_LOG=tube_stats=debug`
//! to see the per-computation events.

use tube_stats::dashboard::{DashboardAnalysis, HistoricalTrend, VideoSample};
use tube_stats::logging::{init_logging, LoggingConfig};
use tube_stats::{calculate_cagr, score_anomalies, EngagementTier, DEFAULT_Z_THRESHOLD};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::development())?;

    // (views, likes, comments) in publication order
    let uploads = [
        (12_400.0, 610.0, 84.0),
        (9_800.0, 350.0, 41.0),
        (15_100.0, 820.0, 133.0),
        (11_250.0, 402.0, 57.0),
        (248_000.0, 19_300.0, 2_410.0),
        (13_900.0, 515.0, 66.0),
        (10_700.0, 198.0, 22.0),
    ];

    let samples: Vec<VideoSample> = uploads
        .iter()
        .map(|&(views, likes, comments)| VideoSample::from_counts(views, likes, comments))
        .collect();

    let analysis = DashboardAnalysis::from_samples(&samples)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    for (i, sample) in samples.iter().enumerate() {
        println!(
            "video {i}: engagement {:.2}% ({})",
            sample.engagement_rate,
            EngagementTier::classify(sample.engagement_rate)
        );
    }

    let views: Vec<f64> = samples.iter().map(|s| s.view_count).collect();
    for anomaly in score_anomalies(&views, DEFAULT_Z_THRESHOLD)? {
        println!(
            "video {} is anomalous: {} views (z = {:.2})",
            anomaly.index, anomaly.value, anomaly.z_score
        );
    }

    let monthly_views = [41_000.0, 47_500.0, 52_300.0, 61_800.0, 58_900.0, 70_200.0];
    let history = HistoricalTrend::from_buckets(&monthly_views)?;
    println!("{}", serde_json::to_string_pretty(&history)?);

    let cagr = calculate_cagr(monthly_views[0], monthly_views[monthly_views.len() - 1], 0.5);
    println!("annualized growth: {cagr:.1}%");

    Ok(())
}
