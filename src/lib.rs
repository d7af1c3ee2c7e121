//! Trigger/measurement synchronization analysis
//!
//! Analyzes how a periodic digital trigger lines up with a multi-channel
//! analog measurement stream sampled at a higher rate: rising edges are
//! detected, inter-edge jitter is quantified, and measurement data is
//! aggregated into per-interval, per-channel mean and standard deviation.
//!
//! This crate re-exports the workspace members and provides the batch
//! [`pipeline`] running all three stages over one pair of in-memory tables.
//!
//! # Example
//!
//! ```rust
//! use trigsync::{Channel, MeasurementSignal, TriggerSample};
//!
//! let trigger = vec![
//!     TriggerSample::new(0.0, 0),
//!     TriggerSample::new(1.0, 1),
//!     TriggerSample::new(1.5, 0),
//!     TriggerSample::new(2.0, 1),
//! ];
//! let measurement = MeasurementSignal::new(
//!     vec![1.2, 1.4, 1.6],
//!     vec![Channel::new("ch1", vec![2.0, 2.0, 2.0])],
//! );
//!
//! let output = trigsync::pipeline::run(&trigger, &measurement)?;
//! assert_eq!(output.edges, vec![1.0, 2.0]);
//! assert_eq!(output.table.len(), 1);
//! assert_eq!(output.table.rows[0].stats[0].mean, 2.0);
//! # Ok::<(), trigsync::Error>(())
//! ```

pub mod pipeline;

pub use trigsync_core::{
    check_monotonic, mean, std_dev, Channel, ChannelStat, Error, IntervalStat, IntervalTable,
    JitterReport, MeasurementSignal, Result, TriggerSample,
};
pub use trigsync_interval::aggregate_intervals;
pub use trigsync_trigger::{analyze_jitter, detect_rising_edges};

/// File I/O helpers (TSV inputs, CSV output)
pub use trigsync_io as io;
/// Synthetic data generation for tests and benchmarks
pub use trigsync_synth as synth;
