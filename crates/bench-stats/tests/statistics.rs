//! End-to-end checks of the statistics record against hand-computed values.

use bench_stats::stats::{absolute_deviation, average, critical_value, quantile_sorted, T_INFINITY};
use bench_stats::{statistics_sorted, Config, Statistics, StatsError};
use pretty_assertions::assert_eq;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_empty_sample_is_rejected() {
    assert_eq!(statistics_sorted(&[]), Err(StatsError::EmptySample));
    assert_eq!(quantile_sorted(&[], 0.5), Err(StatsError::EmptySample));
}

#[test]
fn test_invalid_quantile_is_rejected() {
    let samples = [1.0, 2.0, 3.0];
    assert_eq!(
        quantile_sorted(&samples, -0.1),
        Err(StatsError::InvalidQuantile(-0.1))
    );
    assert_eq!(
        quantile_sorted(&samples, 1.1),
        Err(StatsError::InvalidQuantile(1.1))
    );
    assert_eq!(
        StatsError::InvalidQuantile(1.1).to_string(),
        "q must be between 0 and 1, got 1.1"
    );
    assert_eq!(StatsError::EmptySample.to_string(), "samples must not be empty");
}

#[test]
fn test_single_sample_record() {
    let stats = statistics_sorted(&[5.0]).unwrap();
    let expected = Statistics {
        samples: vec![5.0],
        min: 5.0,
        max: 5.0,
        mean: 5.0,
        variance: 0.0,
        sd: 0.0,
        sem: 0.0,
        df: 0,
        critical: 12.706,
        moe: 0.0,
        rme: 0.0,
        aad: 0.0,
        mad: 0.0,
        p50: 5.0,
        p75: 5.0,
        p99: 5.0,
        p995: 5.0,
        p999: 5.0,
    };
    assert_eq!(stats, expected);
}

#[test]
fn test_ten_sample_record() {
    let samples: Vec<f64> = (1..=10).map(f64::from).collect();
    let stats = statistics_sorted(&samples).unwrap();

    assert_eq!(stats.mean, 5.5);
    // Squared deviations sum to 82.5, divided by 9
    assert!(approx(stats.variance, 82.5 / 9.0));
    assert_eq!(stats.df, 9);
    assert_eq!(stats.critical, 2.262);
    assert!(approx(stats.sem, stats.sd / 10.0_f64.sqrt()));
    assert!(approx(stats.moe, stats.sem * 2.262));
    assert!(approx(stats.rme, stats.moe / 5.5 * 100.0));
    // |x - 5.5| = 4.5, 3.5, ... 0.5 twice over, mean 2.5
    assert!(approx(stats.aad, 2.5));
    assert_eq!(stats.p50, 5.5);
    assert!(approx(stats.p75, 7.75));
    assert!(approx(stats.p99, 9.91));
    assert!(approx(stats.p995, 9.955));
    assert!(approx(stats.p999, 9.991));
}

#[test]
fn test_mad_uses_unsorted_deviations() {
    let stats = statistics_sorted(&[10.0, 20.0, 30.0, 50.0]).unwrap();
    assert_eq!(stats.p50, 25.0);
    // Deviations from 25 in input order are [15, 5, 5, 25]: 5 + 0.5 * (5 - 5)
    assert_eq!(stats.mad, 5.0);
}

#[test]
fn test_absolute_deviation_with_average() {
    let aad = absolute_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0], average, Some(3.0)).unwrap();
    assert!(approx(aad, 1.2));
}

#[test]
fn test_critical_value_lookup() {
    assert_eq!(critical_value(1.0), 12.706);
    assert_eq!(critical_value(10_000.0), T_INFINITY);
}

#[test]
fn test_idempotent() {
    let samples = [0.91, 0.95, 1.0, 1.02, 1.1, 1.3, 2.4];
    let first = statistics_sorted(&samples).unwrap();
    let second = statistics_sorted(&samples).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rme.to_bits(), second.rme.to_bits());
}

#[test]
fn test_record_serializes_with_report_field_names() {
    let stats = statistics_sorted(&[1.0, 2.0, 3.0]).unwrap();
    let json = serde_json::to_value(&stats).unwrap();

    for field in [
        "samples", "min", "max", "mean", "variance", "sd", "sem", "df", "critical", "moe", "rme",
        "aad", "mad", "p50", "p75", "p99", "p995", "p999",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(json["df"], 2);

    let parsed: Statistics = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.samples, stats.samples);
    assert_eq!(parsed.df, stats.df);
    assert!(approx(parsed.mean, stats.mean));
}

#[test]
fn test_thresholds_against_record() {
    let stats = Statistics::from_samples(&[3.0, 1.0, 2.0]).unwrap();
    let config = Config::from_str(
        r#"
        [thresholds]
        max_mean = 1.5
        max_p99 = 5.0
        "#,
    )
    .unwrap();

    let failures = config.thresholds.evaluate(&stats);
    assert_eq!(failures, vec!["mean (2.0000) exceeds threshold (1.5000)".to_string()]);
}
