//! Per-interval aggregation of measurement data
//!
//! Consecutive rising-edge timestamps define half-open intervals
//! `[edge[i], edge[i+1])`. This crate partitions a multi-channel measurement
//! stream into those intervals and computes per-channel mean and sample
//! standard deviation for each one, producing the flat result table that is
//! the single output artifact of a synchronization run.
//!
//! Both the edge list and the measurement timestamps are sorted ascending, so
//! selection is a single monotonic two-pointer sweep: total work is
//! O(samples + intervals) regardless of how unevenly samples distribute over
//! intervals.

pub mod aggregate;

pub use aggregate::aggregate_intervals;
