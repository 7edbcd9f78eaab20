//! Aggregation primitives: mean and sample variance.

use crate::error::{Result, StatsError};

/// Collapse a non-finite or negative-zero value to `0.0`.
///
/// Applied to every division in this module so a degenerate sample
/// (a single element, or sums that overflow) yields `0.0` instead of
/// `NaN` or an infinity.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Arithmetic mean of a sample.
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] if `samples` is empty.
///
/// # Examples
///
/// ```
/// use bench_stats::stats::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert!(average(&[]).is_err());
/// ```
pub fn average(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let sum: f64 = samples.iter().sum();
    Ok(finite_or_zero(sum / samples.len() as f64))
}

/// Sample variance with Bessel's correction (divides by `n - 1`).
///
/// `mean` may be passed in when the caller already has it; otherwise it is
/// computed with [`average`]. A single-element sample has variance `0.0`.
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] only when `mean` is `None` and
/// `samples` is empty.
///
/// # Examples
///
/// ```
/// use bench_stats::stats::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0], None), Ok(2.5));
/// assert_eq!(variance(&[5.0], Some(5.0)), Ok(0.0));
/// ```
pub fn variance(samples: &[f64], mean: Option<f64>) -> Result<f64> {
    let mean = match mean {
        Some(mean) => mean,
        None => average(samples)?,
    };

    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    Ok(finite_or_zero(squared_diffs / (samples.len() as f64 - 1.0)))
}
