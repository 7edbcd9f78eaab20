//! Quantile estimation over sorted samples.
//!
//! Quantiles are computed by linear interpolation between the two nearest
//! ranks, with rank `(n - 1) * q`. The input must already be sorted in
//! ascending order; nothing here sorts or checks ordering.

use crate::error::{Result, StatsError};

/// Calculate the `q`-quantile of an ascending slice.
///
/// # Arguments
///
/// * `samples` - Sorted slice of samples
/// * `q` - Quantile probability (0.0 to 1.0)
///
/// # Errors
///
/// * [`StatsError::EmptySample`] - If `samples` is empty
/// * [`StatsError::InvalidQuantile`] - If `q` is outside `[0, 1]` or NaN
///
/// # Examples
///
/// ```
/// use bench_stats::stats::quantile_sorted;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(quantile_sorted(&data, 0.5), Ok(5.5));
/// assert!(quantile_sorted(&data, 1.5).is_err());
/// ```
pub fn quantile_sorted(samples: &[f64], q: f64) -> Result<f64> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(StatsError::EmptySample),
    };
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidQuantile(q));
    }

    if q == 0.0 {
        return Ok(first);
    }
    if q == 1.0 {
        return Ok(last);
    }

    let rank = (samples.len() - 1) as f64 * q;
    let lower_index = rank.floor() as usize;
    let lower_value = samples[lower_index];

    match samples.get(lower_index + 1) {
        Some(&upper_value) => {
            let fraction = rank - lower_index as f64;
            Ok(lower_value + fraction * (upper_value - lower_value))
        }
        None => Ok(lower_value),
    }
}

/// Median of an ascending slice, i.e. the 0.5-quantile.
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] if `samples` is empty.
pub fn median_sorted(samples: &[f64]) -> Result<f64> {
    quantile_sorted(samples, 0.5)
}
