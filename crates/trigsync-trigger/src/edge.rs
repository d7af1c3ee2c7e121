//! Rising-edge detection over a digital trigger signal

use trigsync_core::{Error, Result, TriggerSample};

/// Detect the timestamps of rising edges in a trigger signal
///
/// A rising edge is a 0 → 1 transition between two consecutive samples; the
/// emitted timestamp is that of the high sample. The scan is a single
/// left-to-right pass whose only state is the previous level. No smoothing,
/// debouncing, or hysteresis is applied; levels other than 0 and 1 never
/// match the transition test.
///
/// The input must already be time-ordered. The scan verifies that timestamps
/// are monotonically non-decreasing and fails with
/// [`Error::NonMonotonicTimestamps`] at the first violation rather than
/// producing nonsensical intervals; the `Result` return exists for this check
/// alone.
///
/// Fewer than 2 samples yield an empty result, not an error.
pub fn detect_rising_edges(signal: &[TriggerSample]) -> Result<Vec<f64>> {
    let mut edges = Vec::new();
    for (i, pair) in signal.windows(2).enumerate() {
        let (prev, curr) = (pair[0], pair[1]);
        if curr.timestamp < prev.timestamp {
            return Err(Error::non_monotonic("trigger", i + 1));
        }
        if prev.level == 0 && curr.level == 1 {
            edges.push(curr.timestamp);
        }
    }
    Ok(edges)
}
