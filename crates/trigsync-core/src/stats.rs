//! Scalar statistics helpers shared by the analysis crates

use crate::error::{Error, Result};

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use trigsync_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation (n − 1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements. A single measurement is
/// trivially constant within its interval, so 0.0 is the value the interval
/// aggregator needs here rather than NaN.
///
/// # Examples
///
/// ```rust
/// use trigsync_core::stats::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// assert_eq!(std_dev(&[42.0]), 0.0);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Verify that a timestamp series is monotonically non-decreasing
///
/// `series` names the input in the error ("trigger", "measurement", ...).
/// The index reported is the position of the first offending timestamp.
pub fn check_monotonic(timestamps: &[f64], series: &str) -> Result<()> {
    for (i, pair) in timestamps.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(Error::non_monotonic(series, i + 1));
        }
    }
    Ok(())
}
