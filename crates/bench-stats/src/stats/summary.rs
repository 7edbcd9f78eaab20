//! Assembly of the full statistics record for one benchmark task.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::aggregate::{average, variance};
use super::deviation::absolute_deviation;
use super::quantile::{median_sorted, quantile_sorted};
use super::t_table::critical_value;
use crate::error::Result;

/// Descriptive statistics and confidence-interval parameters of a sample.
///
/// Produced by [`statistics_sorted`] (or [`Statistics::from_sorted`]); the
/// field set is what a benchmark report displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// The input sample, unchanged
    pub samples: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample variance (Bessel-corrected)
    pub variance: f64,
    /// Standard deviation
    pub sd: f64,
    /// Standard error of the mean
    pub sem: f64,
    /// Degrees of freedom, `samples.len() - 1`
    pub df: usize,
    /// Two-tailed 95% Student's t critical value for `df`
    pub critical: f64,
    /// Margin of error, `sem * critical`
    pub moe: f64,
    /// Relative margin of error in percent of the mean
    pub rme: f64,
    /// Mean absolute deviation from the mean
    pub aad: f64,
    /// Median absolute deviation from the median
    pub mad: f64,
    pub p50: f64,
    pub p75: f64,
    pub p99: f64,
    pub p995: f64,
    pub p999: f64,
}

impl Statistics {
    /// Compute statistics from a sample sorted in ascending order.
    ///
    /// Ordering is not checked. Quantiles of an unsorted sample are
    /// meaningless; use [`Statistics::from_samples`] in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`](crate::StatsError::EmptySample)
    /// if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_stats::Statistics;
    ///
    /// let stats = Statistics::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// assert_eq!(stats.p50, 3.0);
    /// assert_eq!(stats.df, 4);
    /// ```
    pub fn from_sorted(samples: &[f64]) -> Result<Self> {
        statistics_sorted(samples)
    }

    /// Sort a copy of `samples` and compute its statistics.
    ///
    /// The returned record keeps the sorted copy in `samples`.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        statistics_sorted(&sorted)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the record holds no samples.
    ///
    /// Always `false` for records built by this crate.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 95% confidence interval of the mean as `(lower, upper)`.
    pub fn confidence_interval(&self) -> (f64, f64) {
        (self.mean - self.moe, self.mean + self.moe)
    }
}

/// Compute the statistics record of an ascending sample.
///
/// See [`Statistics::from_sorted`].
#[instrument(level = "debug", skip_all, fields(n = samples.len()))]
pub fn statistics_sorted(samples: &[f64]) -> Result<Statistics> {
    let mean = average(samples)?;
    let variance = variance(samples, Some(mean))?;
    let sd = variance.sqrt();
    let n = samples.len();
    let sem = sd / (n as f64).sqrt();
    let df = n - 1;
    let critical = critical_value(df as f64);
    let moe = sem * critical;
    // Unguarded: a zero mean gives NaN or an infinity.
    let rme = (moe / mean) * 100.0;
    trace!(mean, sd, df, critical, rme, "Computed dispersion");

    let p50 = median_sorted(samples)?;
    let aad = absolute_deviation(samples, average, Some(mean))?;
    let mad = absolute_deviation(samples, median_sorted, Some(p50))?;

    let stats = Statistics {
        samples: samples.to_vec(),
        min: samples[0],
        max: samples[df],
        mean,
        variance,
        sd,
        sem,
        df,
        critical,
        moe,
        rme,
        aad,
        mad,
        p50,
        p75: quantile_sorted(samples, 0.75)?,
        p99: quantile_sorted(samples, 0.99)?,
        p995: quantile_sorted(samples, 0.995)?,
        p999: quantile_sorted(samples, 0.999)?,
    };

    if !stats.rme.is_finite() {
        debug!(mean, "Relative margin of error is not finite");
    }

    Ok(stats)
}
