//! In-memory data model for trigger and measurement signals

use std::fmt;

use crate::error::{Error, Result};
use crate::stats::check_monotonic;

/// One sample of a TTL-style digital trigger line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSample {
    /// Time of the sample in seconds
    pub timestamp: f64,
    /// Digital level, 0 or 1
    pub level: u8,
}

impl TriggerSample {
    pub fn new(timestamp: f64, level: u8) -> Self {
        Self { timestamp, level }
    }
}

/// One named column of continuous voltage measurements
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub values: Vec<f64>,
}

impl Channel {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A multi-channel measurement stream in columnar form
///
/// All channels share the single `timestamps` column, one row per sampling
/// instant. The channel count is runtime data; nothing in the analysis
/// assumes a fixed number of channels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementSignal {
    pub timestamps: Vec<f64>,
    pub channels: Vec<Channel>,
}

impl MeasurementSignal {
    pub fn new(timestamps: Vec<f64>, channels: Vec<Channel>) -> Self {
        Self {
            timestamps,
            channels,
        }
    }

    /// Number of sampling instants
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Names of all channels, in column order
    pub fn channel_names(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a channel by name
    ///
    /// Fails with [`Error::ChannelMismatch`] when the column is absent; the
    /// caller must not substitute defaults for missing channels.
    pub fn channel(&self, name: &str) -> Result<&Channel> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ChannelMismatch(name.to_string()))
    }

    /// Check column lengths and timestamp ordering
    pub fn validate(&self) -> Result<()> {
        for ch in &self.channels {
            if ch.values.len() != self.timestamps.len() {
                return Err(Error::length_mismatch(
                    &ch.name,
                    self.timestamps.len(),
                    ch.values.len(),
                ));
            }
        }
        check_monotonic(&self.timestamps, "measurement")
    }
}

/// Timing statistics over a sequence of rising edges
///
/// All values are in seconds. `mean_jitter` is the sample standard deviation
/// of the raw consecutive edge differences, not of mean-centered deviations,
/// despite the name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterReport {
    /// Mean of consecutive edge differences
    pub expected_interval: f64,
    /// Sample standard deviation of consecutive edge differences
    pub mean_jitter: f64,
    /// Largest difference minus the expected interval
    pub max_jitter: f64,
    /// Expected interval minus the smallest difference
    pub min_jitter: f64,
}

impl fmt::Display for JitterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Jitter Analysis Summary:")?;
        writeln!(f, "  expected_interval_sec: {:.9} sec", self.expected_interval)?;
        writeln!(f, "  mean_jitter_sec: {:.9} sec", self.mean_jitter)?;
        writeln!(f, "  max_jitter_sec: {:.9} sec", self.max_jitter)?;
        write!(f, "  min_jitter_sec: {:.9} sec", self.min_jitter)
    }
}

/// Per-channel mean and standard deviation within one interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStat {
    pub mean: f64,
    pub std: f64,
}

/// Aggregated statistics for one trigger-defined interval
///
/// Invariant: `end > start`; `stats` is ordered like the source signal's
/// channel columns.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalStat {
    pub start: f64,
    pub end: f64,
    pub stats: Vec<ChannelStat>,
}

/// The output table of an aggregation run
///
/// One row per non-empty interval. `channels` carries the column names so
/// writers can emit `{name}_mean` / `{name}_std` headers without access to
/// the source signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntervalTable {
    pub channels: Vec<String>,
    pub rows: Vec<IntervalStat>,
}

impl IntervalTable {
    pub fn new(channels: Vec<String>) -> Self {
        Self {
            channels,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
