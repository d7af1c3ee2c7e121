//! Batch synchronization pipeline
//!
//! Runs the full analysis over one fixed input pair: detect rising edges,
//! quantify jitter, aggregate the measurement stream into trigger-defined
//! intervals. Inputs are read-only for the duration of a run and the output
//! table is rebuilt from scratch each invocation.

use log::{debug, info};
use trigsync_core::{IntervalTable, JitterReport, MeasurementSignal, Result, TriggerSample};
use trigsync_interval::aggregate_intervals;
use trigsync_trigger::{analyze_jitter, detect_rising_edges};

/// Everything a run derives from its inputs
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Rising-edge timestamps, the authoritative interval boundaries
    pub edges: Vec<f64>,
    /// Timing statistics over the edge sequence
    pub jitter: JitterReport,
    /// Per-interval, per-channel statistics
    pub table: IntervalTable,
}

/// Run edge detection, jitter analysis, and interval aggregation
///
/// Fails fast on the first violated input check (timestamp ordering, fewer
/// than 2 edges, malformed measurement columns); a failed run produces no
/// partial output.
pub fn run(
    trigger: &[TriggerSample],
    measurement: &MeasurementSignal,
) -> Result<PipelineOutput> {
    let edges = detect_rising_edges(trigger)?;
    info!("detected {} rising edges", edges.len());

    let jitter = analyze_jitter(&edges)?;
    debug!("{jitter}");

    let table = aggregate_intervals(measurement, &edges)?;
    info!(
        "aggregated {} of {} intervals",
        table.len(),
        edges.len() - 1
    );

    Ok(PipelineOutput {
        edges,
        jitter,
        table,
    })
}

/// Like [`run`], but first verifies that every expected channel column is
/// present in the measurement signal
pub fn run_with_channels(
    trigger: &[TriggerSample],
    measurement: &MeasurementSignal,
    expected_channels: &[&str],
) -> Result<PipelineOutput> {
    for name in expected_channels {
        measurement.channel(name)?;
    }
    run(trigger, measurement)
}
