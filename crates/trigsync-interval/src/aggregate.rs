//! Two-pointer interval aggregation

use log::warn;
use trigsync_core::{
    mean, std_dev, ChannelStat, Error, IntervalStat, IntervalTable, MeasurementSignal, Result,
};

/// Aggregate a measurement signal into trigger-defined intervals
///
/// For each pair of consecutive edges, selects the measurement rows with
/// timestamp in the half-open range `[edges[i], edges[i+1])` and computes
/// mean and sample standard deviation (n − 1) per channel. A sample whose
/// timestamp equals an edge belongs to the interval starting at that edge,
/// never the preceding one.
///
/// Policies:
/// - an interval containing no measurement samples is skipped from the
///   output and logged as a warning, so the row count can be smaller than
///   `edges.len() - 1`;
/// - an interval containing a single sample gets std 0.0 for every channel.
///
/// Fails with [`Error::InsufficientEdges`] when fewer than 2 edges are given
/// (no interval can be formed), and with the ordering or length-mismatch
/// errors from [`MeasurementSignal::validate`] on malformed input.
pub fn aggregate_intervals(
    measurement: &MeasurementSignal,
    edges: &[f64],
) -> Result<IntervalTable> {
    if edges.len() < 2 {
        return Err(Error::InsufficientEdges {
            expected: 2,
            actual: edges.len(),
        });
    }
    measurement.validate()?;

    let mut table = IntervalTable::new(measurement.channel_names());
    let timestamps = &measurement.timestamps;

    // Left cursor of the current interval's sample range. Never moves
    // backwards: edges ascend, so each sample is visited once.
    let mut lo = 0;
    for pair in edges.windows(2) {
        let (start, end) = (pair[0], pair[1]);

        while lo < timestamps.len() && timestamps[lo] < start {
            lo += 1;
        }
        let mut hi = lo;
        while hi < timestamps.len() && timestamps[hi] < end {
            hi += 1;
        }

        if hi == lo {
            warn!("interval [{start}, {end}) contains no measurement samples, skipping");
            continue;
        }

        let stats = measurement
            .channels
            .iter()
            .map(|ch| {
                let slice = &ch.values[lo..hi];
                ChannelStat {
                    mean: mean(slice),
                    // std_dev is 0.0 for a single sample, never NaN
                    std: std_dev(slice),
                }
            })
            .collect();

        table.rows.push(IntervalStat { start, end, stats });
        lo = hi;
    }

    Ok(table)
}
