//! Two-tailed Student's t critical values at 95% confidence.

/// Critical value for infinite degrees of freedom (the normal z-score).
pub const T_INFINITY: f64 = 1.96;

/// Largest tabulated degrees of freedom.
pub const MAX_TABULATED_DF: usize = 30;

/// `T_TABLE[df - 1]` is the critical value for `df` degrees of freedom.
static T_TABLE: [f64; MAX_TABULATED_DF] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, // 1-10
    2.201, 2.179, 2.16, 2.145, 2.131, 2.12, 2.11, 2.101, 2.093, 2.086, // 11-20
    2.08, 2.074, 2.069, 2.064, 2.06, 2.056, 2.052, 2.048, 2.045, 2.042, // 21-30
];

/// Look up the critical t value for `df` degrees of freedom.
///
/// `df` is rounded to the nearest integer. A result of zero (or NaN) is
/// treated as one degree of freedom; anything outside `1..=30` falls back
/// to [`T_INFINITY`].
///
/// # Examples
///
/// ```
/// use bench_stats::stats::{critical_value, T_INFINITY};
///
/// assert_eq!(critical_value(1.0), 12.706);
/// assert_eq!(critical_value(0.0), 12.706);
/// assert_eq!(critical_value(10_000.0), T_INFINITY);
/// ```
pub fn critical_value(df: f64) -> f64 {
    let rounded = df.round();
    let key = if rounded == 0.0 || rounded.is_nan() {
        1.0
    } else {
        rounded
    };

    if (1.0..=MAX_TABULATED_DF as f64).contains(&key) {
        T_TABLE[key as usize - 1]
    } else {
        T_INFINITY
    }
}
