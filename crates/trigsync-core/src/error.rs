//! Error types for synchronization analysis
//!
//! Provides a unified error type for all trigsync crates.

use thiserror::Error;

/// Core error type for synchronization analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Timestamps in an input series are not monotonically non-decreasing
    #[error("Non-monotonic timestamps in {series} at index {index}")]
    NonMonotonicTimestamps { series: String, index: usize },

    /// Fewer rising edges than the operation requires
    #[error("Insufficient edges: expected at least {expected}, got {actual}")]
    InsufficientEdges { expected: usize, actual: usize },

    /// An expected measurement channel column is missing
    #[error("Channel mismatch: no channel named {0:?}")]
    ChannelMismatch(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an out-of-order timestamp
    pub fn non_monotonic(series: &str, index: usize) -> Self {
        Self::NonMonotonicTimestamps {
            series: series.to_string(),
            index,
        }
    }

    /// Create an error for a channel whose length disagrees with the
    /// timestamp column
    pub fn length_mismatch(channel: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "Channel {channel:?} has {actual} values but the timestamp column has {expected}"
        ))
    }
}
