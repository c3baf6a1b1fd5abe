//! Integration tests for the public statistics API.

use tube_stats::prelude::*;
use tube_stats::{
    calculate_cagr, calculate_engagement_score, calculate_growth_rate, calculate_market_share,
    calculate_trending_velocity, Quartiles,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_single_value_metrics() {
    let metrics = calculate_metrics(&[5.0]).unwrap();
    assert_eq!(metrics.mean, 5.0);
    assert_eq!(metrics.median, 5.0);
    assert_eq!(metrics.mode, 5.0);
    assert_eq!(metrics.standard_deviation, 0.0);
    assert_eq!(metrics.variance, 0.0);
    assert_eq!(metrics.min, 5.0);
    assert_eq!(metrics.max, 5.0);
    assert_eq!(metrics.range, 0.0);
    assert_eq!(
        metrics.quartiles,
        Quartiles {
            q1: 5.0,
            q2: 5.0,
            q3: 5.0
        }
    );
    assert!(metrics.outliers.is_empty());
}

#[test]
fn test_metrics_with_outlier() {
    let metrics = calculate_metrics(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
    assert_close(metrics.mean, 19.1667, 1e-4);
    assert_eq!(metrics.median, 3.5);
    assert_eq!(metrics.quartiles.q1, 2.0);
    assert_eq!(metrics.quartiles.q3, 5.0);
    assert!(metrics.outliers.contains(&100.0));
}

#[test]
fn test_metrics_ordering_invariants() {
    let data = [
        12_400.0, 3_100.0, 87_000.0, 3_100.0, 450.0, 19_800.0, 2_250.0, 640_000.0,
    ];
    let metrics = calculate_metrics(&data).unwrap();
    assert!(metrics.min <= metrics.quartiles.q1);
    assert!(metrics.quartiles.q1 <= metrics.quartiles.q2);
    assert!(metrics.quartiles.q2 <= metrics.quartiles.q3);
    assert!(metrics.quartiles.q3 <= metrics.max);
    assert_eq!(metrics.quartiles.q2, metrics.median);
    assert_eq!(metrics.range, metrics.max - metrics.min);
    assert_eq!(metrics.mode, 3_100.0);
    assert_eq!(metrics.outliers, vec![640_000.0]);
}

#[test]
fn test_empty_metrics_is_invalid_input() {
    assert!(matches!(
        calculate_metrics(&[]),
        Err(StatsError::InvalidInput(_))
    ));
}

#[test]
fn test_correlation_examples() {
    let result = calculate_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert_eq!(result.correlation, 1.0);
    assert_eq!(result.strength, Strength::Strong);
    assert_eq!(result.direction, CorrelationDirection::Positive);

    let forward = calculate_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    let backward = calculate_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(forward.correlation, backward.correlation);
}

#[test]
fn test_correlation_dimension_mismatch() {
    let err = calculate_correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        StatsError::DimensionMismatch { left: 2, right: 3 }
    ));
}

#[test]
fn test_trend_example() {
    let points = [
        TimeSeriesPoint::new(0.0, 1.0),
        TimeSeriesPoint::new(1.0, 2.0),
        TimeSeriesPoint::new(2.0, 3.0),
    ];
    let trend = analyze_trend(&points).unwrap();
    assert_eq!(trend.slope, 1.0);
    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert_eq!(trend.r_squared, 1.0);
    assert_eq!(trend.strength, Strength::Strong);
}

#[test]
fn test_trend_requires_two_points() {
    let err = analyze_trend(&[TimeSeriesPoint::new(0.0, 1.0)]).unwrap_err();
    assert!(matches!(
        err,
        StatsError::InsufficientData {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_trend_flat_series_boundary() {
    let trend = analyze_trend(&series_from_values(&[3.0, 3.0, 3.0, 3.0])).unwrap();
    assert_eq!(trend.slope, 0.0);
    assert_eq!(trend.r_squared, 1.0);
    assert_eq!(trend.direction, TrendDirection::Stable);

    let trend = analyze_trend(&series_from_values(&[1.1; 7])).unwrap();
    assert_eq!(trend.slope, 0.0);
    assert_eq!(trend.r_squared, 1.0);
    assert_eq!(trend.strength, Strength::Strong);
}

#[test]
fn test_growth_scalars() {
    assert_eq!(calculate_growth_rate(0.0, 0.0), 0.0);
    assert_eq!(calculate_growth_rate(50.0, 0.0), 100.0);
    assert_eq!(calculate_growth_rate(150.0, 100.0), 50.0);

    assert_close(calculate_cagr(1000.0, 8000.0, 3.0), 100.0, 1e-9);
    assert_eq!(calculate_cagr(0.0, 8000.0, 3.0), 0.0);

    assert_eq!(calculate_trending_velocity(120.0, 60.0, 6.0), 10.0);
    assert_eq!(calculate_trending_velocity(120.0, 60.0, 0.0), 0.0);

    assert_eq!(calculate_market_share(50.0, 200.0), 25.0);
    assert_eq!(calculate_market_share(50.0, 0.0), 0.0);
}

#[test]
fn test_engagement_score_optional_shares() {
    let without = calculate_engagement_score(2000.0, 100.0, 50.0, None);
    let with = calculate_engagement_score(2000.0, 100.0, 50.0, Some(20.0));
    assert_eq!(without, 10.0);
    assert_eq!(with, 13.0);
}

#[test]
fn test_anomaly_example() {
    let anomalies = detect_anomalies(&[1.0, 1.0, 1.0, 1.0, 100.0], 2.0).unwrap();
    assert_eq!(anomalies, vec![4]);
}

#[test]
fn test_anomaly_zero_spread_boundary() {
    let anomalies = detect_anomalies(&[4.0, 4.0, 4.0, 4.0], DEFAULT_Z_THRESHOLD).unwrap();
    assert!(anomalies.is_empty());

    let repeated = vec![0.1; 10];
    assert_eq!(calculate_metrics(&repeated).unwrap().range, 0.0);
    assert!(detect_anomalies(&repeated, 0.5).unwrap().is_empty());
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let data = [0.1, 0.7, 0.3, 1e6, 42.0, 0.7];
    let first = calculate_metrics(&data).unwrap();
    let second = calculate_metrics(&data).unwrap();
    assert_eq!(first.mean.to_bits(), second.mean.to_bits());
    assert_eq!(
        first.standard_deviation.to_bits(),
        second.standard_deviation.to_bits()
    );
    assert_eq!(first, second);

    let x = [1.0, 5.0, 2.5, 9.0];
    let y = [0.3, 2.0, 1.1, 3.9];
    assert_eq!(
        calculate_correlation(&x, &y).unwrap().correlation.to_bits(),
        calculate_correlation(&x, &y).unwrap().correlation.to_bits()
    );
}

#[test]
fn test_concurrent_calls() {
    let data: Vec<f64> = (0..1_000).map(|i| (i % 37) as f64 * 1.5).collect();
    let expected = calculate_metrics(&data).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| calculate_metrics(&data).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_results_serialize_for_consumers() {
    let metrics = calculate_metrics(&[1.0, 2.0, 3.0]).unwrap();
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["standardDeviation"], metrics.standard_deviation);
    assert_eq!(json["quartiles"]["q2"], 2.0);
    assert!(json["outliers"].as_array().unwrap().is_empty());

    let round_trip: DescriptiveMetrics = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, metrics);
}
