//! Configuration and constants for trace analysis.

use crate::utils::error::ConfigError;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default throughput window width in seconds
pub const DEFAULT_WINDOW_SECS: f64 = 0.1;

/// Node whose enqueue events mark a packet as sent
pub const DEFAULT_SOURCE_NODE: i64 = 0;

/// Node whose receive events count toward throughput and delay
pub const DEFAULT_DEST_NODE: i64 = 1;

// Positional layout of an ns-2 trace line:
// event time from to type size flags fid src dst seq id
pub const MIN_FIELDS: usize = 11;
pub const FIELD_EVENT: usize = 0;
pub const FIELD_TIME: usize = 1;
pub const FIELD_FROM_NODE: usize = 2;
pub const FIELD_TO_NODE: usize = 3;
pub const FIELD_SIZE: usize = 5;
pub const FIELD_SEQ: usize = 10;

pub const BITS_PER_BYTE: f64 = 8.0;
pub const BITS_PER_MEGABIT: f64 = 1_000_000.0;

// Defaults for the compare command
pub const DEFAULT_CANDIDATE_TRACE: &str = "bbr_trace.tr";
pub const DEFAULT_BASELINE_TRACE: &str = "reno_trace.tr";
pub const DEFAULT_CANDIDATE_NAME: &str = "BBR";
pub const DEFAULT_BASELINE_NAME: &str = "Reno";
pub const COMPARISON_PLOT_FILE: &str = "throughput_comparison.svg";
pub const DELAY_PLOT_FILE: &str = "delay_comparison.svg";

/// Parameters for a single parse call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConfig {
    /// Throughput bucket width (seconds)
    pub window_secs: f64,

    /// Sender node id
    pub source_node: i64,

    /// Receiver node id
    pub dest_node: i64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            source_node: DEFAULT_SOURCE_NODE,
            dest_node: DEFAULT_DEST_NODE,
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window_secs: f64) -> Self {
        self.window_secs = window_secs;
        self
    }

    pub fn with_nodes(mut self, source_node: i64, dest_node: i64) -> Self {
        self.source_node = source_node;
        self.dest_node = dest_node;
        self
    }

    /// Reject windows that would stall or invert the bucket walk
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(ConfigError::InvalidWindow(self.window_secs));
        }
        if self.source_node == self.dest_node {
            return Err(ConfigError::SameNode(self.source_node));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TraceConfig::default();
        assert_eq!(config.window_secs, 0.1);
        assert_eq!(config.source_node, 0);
        assert_eq!(config.dest_node, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_window() {
        assert!(TraceConfig::new().with_window(0.0).validate().is_err());
        assert!(TraceConfig::new().with_window(-0.5).validate().is_err());
        assert!(TraceConfig::new().with_window(f64::NAN).validate().is_err());
        assert!(TraceConfig::new().with_window(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_rejects_same_node() {
        let config = TraceConfig::new().with_nodes(2, 2);
        assert!(matches!(config.validate(), Err(ConfigError::SameNode(2))));
    }
}
