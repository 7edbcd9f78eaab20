//! Absolute deviation around a central value.
//!
//! The same routine yields the mean absolute deviation and the median
//! absolute deviation depending on which aggregator is plugged in.

use super::aggregate::average;
use super::quantile::median_sorted;
use crate::error::Result;

/// Absolute deviation of `samples` around an aggregate.
///
/// Builds `|x - center|` for every sample, keeping input order, and reduces
/// that vector with `aggregate`. `center` defaults to `aggregate(samples)`
/// when not supplied. Any error from `aggregate` is propagated, which is how
/// an empty sample is rejected.
///
/// Note that the deviations are not re-sorted before aggregation, so an
/// order-sensitive aggregator such as [`median_sorted`] sees them in input
/// order.
///
/// # Examples
///
/// ```
/// use bench_stats::stats::{absolute_deviation, average};
///
/// let aad = absolute_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0], average, Some(3.0)).unwrap();
/// assert!((aad - 1.2).abs() < 1e-12);
/// ```
pub fn absolute_deviation<F>(samples: &[f64], aggregate: F, center: Option<f64>) -> Result<f64>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    let center = match center {
        Some(center) => center,
        None => aggregate(samples)?,
    };

    let deviations: Vec<f64> = samples.iter().map(|&x| (x - center).abs()).collect();
    aggregate(&deviations)
}

/// Mean absolute deviation from the mean.
pub fn mean_absolute_deviation(samples: &[f64], mean: Option<f64>) -> Result<f64> {
    absolute_deviation(samples, average, mean)
}

/// Median absolute deviation from the median of a sorted sample.
pub fn median_absolute_deviation(samples: &[f64], median: Option<f64>) -> Result<f64> {
    absolute_deviation(samples, median_sorted, median)
}
