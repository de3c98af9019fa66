//! Fixed-width windowing of received bytes into a throughput series.
//!
//! Receive events arrive in trace order. Each one either falls into the
//! currently open window or closes it; closing walks the window forward one
//! width at a time, emitting zero buckets for silent stretches, so the series
//! covers time uniformly.
//!
//! Values are kept in bits/s while scanning and converted to Mbps once, in
//! [`ThroughputWindow::finish`].

use crate::utils::config::{BITS_PER_BYTE, BITS_PER_MEGABIT};
use serde::{Deserialize, Serialize};

/// One throughput bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThroughputSample {
    /// Bucket start time (seconds)
    pub time: f64,

    /// Throughput over the bucket (Mbps once finished)
    pub mbps: f64,
}

/// Bucket accumulator for a single parse call
#[derive(Debug, Clone)]
pub struct ThroughputWindow {
    window_secs: f64,
    bucket_start: f64,
    bytes: u128,
    buckets: Vec<ThroughputSample>,
}

impl ThroughputWindow {
    /// Create an accumulator with its first window starting at 0
    ///
    /// `window_secs` must be positive and finite (see `TraceConfig::validate`).
    pub fn new(window_secs: f64) -> Self {
        Self {
            window_secs,
            bucket_start: 0.0,
            bytes: 0,
            buckets: Vec::new(),
        }
    }

    /// Account a received packet of `size` bytes at `timestamp`
    ///
    /// **Public** - called by the trace scanner for every qualifying receive
    pub fn record(&mut self, timestamp: f64, size: u64) {
        let w = self.window_secs;

        if timestamp > self.bucket_start + w {
            // The window starting at 0 is only ever emitted by the final flush
            if self.bucket_start > 0.0 {
                self.emit(self.bucket_start, self.bits_per_sec(self.bytes));
            }

            self.bytes = u128::from(size);
            self.bucket_start += w;

            while self.bucket_start + w < timestamp {
                self.emit(self.bucket_start, 0.0);
                self.bucket_start += w;
            }
        } else {
            self.bytes = self.bytes.saturating_add(u128::from(size));
        }
    }

    /// Start time of the window currently accumulating
    #[cfg(test)]
    fn current_start(&self) -> f64 {
        self.bucket_start
    }

    /// Bytes accumulated in the open window
    #[cfg(test)]
    fn pending_bytes(&self) -> u128 {
        self.bytes
    }

    /// Number of buckets closed so far
    #[cfg(test)]
    fn closed_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Flush the open window and return the series in Mbps
    ///
    /// **Public** - consumes the accumulator at the end of a scan
    pub fn finish(mut self) -> Vec<ThroughputSample> {
        if self.bytes > 0 {
            self.emit(self.bucket_start, self.bits_per_sec(self.bytes));
        }

        for bucket in &mut self.buckets {
            bucket.mbps /= BITS_PER_MEGABIT;
        }

        self.buckets
    }

    fn bits_per_sec(&self, bytes: u128) -> f64 {
        bytes as f64 * BITS_PER_BYTE / self.window_secs
    }

    fn emit(&mut self, time: f64, bits_per_sec: f64) {
        self.buckets.push(ThroughputSample {
            time,
            mbps: bits_per_sec,
        });
    }
}
