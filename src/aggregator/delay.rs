//! Send/receive correlation for end-to-end delay.
//!
//! Sends at the source node park their timestamp under the packet's sequence
//! id. The first receive at the destination with that id consumes the entry
//! and yields one delay sample. A resend before delivery overwrites the
//! pending timestamp, so each pairing is counted at most once.

use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One correlated send/receive pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelaySample {
    /// Receive timestamp (seconds)
    pub time: f64,

    /// Receive time minus send time (seconds)
    pub delay: f64,
}

/// Pending-send table plus the delay samples produced so far
#[derive(Debug, Clone, Default)]
pub struct DelayTracker {
    pending: HashMap<String, f64>,
    samples: Vec<DelaySample>,
}

impl DelayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember when `sequence_id` was sent
    ///
    /// Returns the send time it replaced, if any (last send wins).
    pub fn record_send(&mut self, sequence_id: &str, timestamp: f64) -> Option<f64> {
        let previous = self.pending.insert(sequence_id.to_string(), timestamp);
        if let Some(prev) = previous {
            trace!("Resend of {} at {} replaces send at {}", sequence_id, timestamp, prev);
        }
        previous
    }

    /// Match a receive against the pending table
    ///
    /// Returns the delay when a pending send existed. The entry is removed
    /// either way, so a duplicate receive yields nothing.
    pub fn match_receive(&mut self, sequence_id: &str, timestamp: f64) -> Option<f64> {
        let sent_at = self.pending.remove(sequence_id)?;
        let delay = timestamp - sent_at;
        self.samples.push(DelaySample {
            time: timestamp,
            delay,
        });
        Some(delay)
    }

    /// Sends still waiting for a receive
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Drop the pending table and return samples in receive order
    pub fn finish(self) -> Vec<DelaySample> {
        self.samples
    }
}
