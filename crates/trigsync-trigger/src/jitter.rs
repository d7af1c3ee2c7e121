//! Inter-edge jitter statistics

use trigsync_core::{mean, std_dev, Error, JitterReport, Result};

/// Compute timing statistics over a sequence of rising-edge timestamps
///
/// Works on the consecutive differences `d[i] = edges[i+1] - edges[i]`:
///
/// - `expected_interval` is the arithmetic mean of the differences;
/// - `mean_jitter` is the sample standard deviation (n − 1) of the raw
///   differences; the statistic is computed on the differences themselves,
///   not on their deviations from the mean;
/// - `max_jitter` is `max(d) - expected_interval`;
/// - `min_jitter` is `expected_interval - min(d)`.
///
/// For a perfectly periodic trigger all four deviation figures are 0.
///
/// Requires at least 2 edges (one difference); fails with
/// [`Error::InsufficientEdges`] otherwise instead of producing NaN
/// statistics.
pub fn analyze_jitter(edges: &[f64]) -> Result<JitterReport> {
    if edges.len() < 2 {
        return Err(Error::InsufficientEdges {
            expected: 2,
            actual: edges.len(),
        });
    }

    let diffs: Vec<f64> = edges.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let expected_interval = mean(&diffs);
    let max_diff = diffs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_diff = diffs.iter().cloned().fold(f64::INFINITY, f64::min);

    Ok(JitterReport {
        expected_interval,
        mean_jitter: std_dev(&diffs),
        max_jitter: max_diff - expected_interval,
        min_jitter: expected_interval - min_diff,
    })
}
