//! Core types for trigger/measurement synchronization analysis
//!
//! This crate provides the shared foundation for the trigsync workspace:
//! the error type, the in-memory data model (trigger samples, measurement
//! signals, jitter reports, interval tables), and the scalar statistics
//! helpers the analysis crates build on.
//!
//! # Data flow
//!
//! A trigger signal (TTL-style 0/1 samples) is scanned for rising edges;
//! consecutive edges define half-open time intervals; a multi-channel
//! measurement signal is aggregated into per-interval, per-channel mean and
//! standard deviation. All inputs and outputs are plain in-memory tables so
//! file I/O and rendering layers can be swapped freely.

pub mod error;
pub mod signal;
pub mod stats;

pub use error::{Error, Result};
pub use signal::{
    Channel, ChannelStat, IntervalStat, IntervalTable, JitterReport, MeasurementSignal,
    TriggerSample,
};
pub use stats::{check_monotonic, mean, std_dev};
