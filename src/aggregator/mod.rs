//! Aggregation of trace events into time series and statistics.
//!
//! This module transforms parsed trace events into:
//! - A fixed-window throughput series (with zero-filled gaps)
//! - A per-packet delay series from send/receive correlation
//! - Summary statistics over a throughput series

pub mod delay;
pub mod stats;
pub mod throughput;

// Re-export main types and functions
pub use delay::{DelaySample, DelayTracker};
pub use stats::{improvement_percent, summarize, ThroughputStats};
pub use throughput::{ThroughputSample, ThroughputWindow};
