//! Statistical summary engine for micro-benchmarks
//!
//! Given the sorted timing samples of a benchmark task, this crate computes
//! the descriptive statistics and confidence-interval parameters that a
//! benchmark report displays.
//!
//! # Features
//!
//! - **Aggregation**: mean and Bessel-corrected variance with a zero fallback
//!   for degenerate samples
//! - **Quantiles**: linear interpolation between nearest ranks (p50 to p999)
//! - **Dispersion**: standard deviation, standard error, mean and median
//!   absolute deviation
//! - **Confidence**: Student's t critical values and relative margin of error
//! - **Thresholds**: TOML-configured limits evaluated against a result
//!
//! The crate does not collect samples, time anything, or render reports.
//! Samples are plain `f64` values in one unit (milliseconds by convention).
//!
//! # Example
//!
//! ```
//! use bench_stats::{Config, Statistics};
//!
//! # fn example() -> anyhow::Result<()> {
//! let samples = [0.98, 1.02, 1.00, 1.05, 0.97, 1.01];
//! let stats = Statistics::from_samples(&samples)?;
//!
//! let config = Config::from_str(
//!     r#"
//!     [thresholds]
//!     max_rme = 5.0
//!     "#,
//! )?;
//! let failures = config.thresholds.evaluate(&stats);
//! assert!(failures.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod stats;

// Re-export main types for convenience
pub use config::{Config, Thresholds};
pub use error::{Result, StatsError};
pub use stats::{statistics_sorted, Statistics};
