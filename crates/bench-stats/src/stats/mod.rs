//! Statistical summary of benchmark samples
//!
//! This module turns a sorted sample of timings into the figures a benchmark
//! report shows: central tendency, dispersion, quantiles and a 95%
//! confidence interval of the mean.
//!
//! # Examples
//!
//! ```
//! use bench_stats::stats::{quantile_sorted, statistics_sorted};
//!
//! let samples: Vec<f64> = vec![10.0, 11.0, 10.5, 11.5, 12.0, 11.0];
//! let mut sorted = samples.clone();
//! sorted.sort_by(|a, b| a.total_cmp(b));
//!
//! let stats = statistics_sorted(&sorted).unwrap();
//! println!("mean: {:.3} ± {:.2}%", stats.mean, stats.rme);
//!
//! let p90 = quantile_sorted(&sorted, 0.9).unwrap();
//! assert!(p90 <= stats.max);
//! ```

pub mod aggregate;
pub mod deviation;
pub mod quantile;
pub mod summary;
pub mod t_table;

// Re-export main types and functions
pub use aggregate::{average, finite_or_zero, variance};
pub use deviation::{absolute_deviation, mean_absolute_deviation, median_absolute_deviation};
pub use quantile::{median_sorted, quantile_sorted};
pub use summary::{statistics_sorted, Statistics};
pub use t_table::{critical_value, MAX_TABULATED_DF, T_INFINITY};
