//! Trigger-side analysis: rising-edge detection and jitter statistics
//!
//! A trigger signal is a time-ordered sequence of 0/1 samples from a TTL
//! digital line. This crate turns it into the ordered list of rising-edge
//! timestamps that defines the interval boundaries for downstream
//! aggregation, and quantifies the timing jitter between those edges.
//!
//! # Example
//!
//! ```rust
//! use trigsync_core::TriggerSample;
//! use trigsync_trigger::{analyze_jitter, detect_rising_edges};
//!
//! let signal = vec![
//!     TriggerSample::new(0.000, 0),
//!     TriggerSample::new(0.025, 1),
//!     TriggerSample::new(0.050, 0),
//!     TriggerSample::new(0.075, 1),
//! ];
//! let edges = detect_rising_edges(&signal)?;
//! assert_eq!(edges, vec![0.025, 0.075]);
//!
//! let report = analyze_jitter(&edges)?;
//! assert!((report.expected_interval - 0.05).abs() < 1e-12);
//! # Ok::<(), trigsync_core::Error>(())
//! ```

pub mod edge;
pub mod jitter;

pub use edge::detect_rising_edges;
pub use jitter::analyze_jitter;
