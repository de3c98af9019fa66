//! Single-pass scanner for ns-2 style event traces.
//!
//! Feeds every well-formed record through the throughput window and the
//! delay tracker. Bad lines are skipped and counted; only failing to read
//! the source at all is an error.

use crate::aggregator::{DelaySample, DelayTracker, ThroughputSample, ThroughputWindow};
use crate::parser::record::{parse_record, EventKind, TraceEvent};
use crate::utils::config::TraceConfig;
use crate::utils::error::{ConfigError, ParseError};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Diagnostic counters for one parse call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseCounts {
    pub lines_read: u64,
    pub records_parsed: u64,
    pub lines_skipped: u64,
    pub throughput_points: usize,
    pub delay_points: usize,
}

/// Result of scanning one trace
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTrace {
    /// Bucket width used for the throughput series
    pub window_secs: f64,

    /// Throughput per window (Mbps), ordered by bucket start
    pub throughput: Vec<ThroughputSample>,

    /// Delay per correlated packet, in receive order
    pub delay: Vec<DelaySample>,

    pub counts: ParseCounts,
}

impl ParsedTrace {
    /// Both series empty; what callers fall back to after a source error
    pub fn empty(window_secs: f64) -> Self {
        Self {
            window_secs,
            throughput: Vec::new(),
            delay: Vec::new(),
            counts: ParseCounts::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.throughput.is_empty() && self.delay.is_empty()
    }
}

/// Stateful scanner owning the window accumulator and pending-send table
///
/// **Public** - use directly when lines arrive from a custom source
#[derive(Debug)]
pub struct TraceScanner {
    config: TraceConfig,
    window: ThroughputWindow,
    tracker: DelayTracker,
    counts: ParseCounts,
}

impl TraceScanner {
    /// Create a scanner for one trace
    ///
    /// # Errors
    /// * `ConfigError` - window width or node ids are unusable
    pub fn new(config: TraceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            window: ThroughputWindow::new(config.window_secs),
            tracker: DelayTracker::new(),
            counts: ParseCounts::default(),
        })
    }

    /// Process one raw trace line
    pub fn feed(&mut self, line: &str) {
        self.counts.lines_read += 1;

        match parse_record(line) {
            Ok(event) => {
                self.counts.records_parsed += 1;
                self.apply(&event);
            }
            Err(e) => {
                self.counts.lines_skipped += 1;
                trace!("Skipping line {}: {}", self.counts.lines_read, e);
            }
        }
    }

    /// Route a parsed record to the window and the tracker
    fn apply(&mut self, event: &TraceEvent) {
        match event.kind {
            EventKind::Receive if event.dest_node == self.config.dest_node => {
                self.window.record(event.timestamp, event.packet_size);
                self.tracker.match_receive(&event.sequence_id, event.timestamp);
            }
            EventKind::Send if event.source_node == self.config.source_node => {
                self.tracker.record_send(&event.sequence_id, event.timestamp);
            }
            _ => {}
        }
    }

    /// Flush the open window and hand back both series
    pub fn finish(self) -> ParsedTrace {
        let unmatched = self.tracker.pending_count();
        let throughput = self.window.finish();
        let delay = self.tracker.finish();

        let counts = ParseCounts {
            throughput_points: throughput.len(),
            delay_points: delay.len(),
            ..self.counts
        };

        debug!(
            "Scan complete: {} lines, {} records, {} skipped, {} sends never received",
            counts.lines_read, counts.records_parsed, counts.lines_skipped, unmatched
        );

        ParsedTrace {
            window_secs: self.config.window_secs,
            throughput,
            delay,
            counts,
        }
    }
}

/// Parse an in-memory sequence of trace lines
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `lines` - Raw trace lines in file order
/// * `config` - Window width and node selection
///
/// # Returns
/// Throughput and delay series; malformed lines never cause an error
///
/// # Errors
/// * `ConfigError` - invalid window or node configuration
pub fn parse_lines<I, S>(lines: I, config: &TraceConfig) -> Result<ParsedTrace, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = TraceScanner::new(*config)?;
    for line in lines {
        scanner.feed(line.as_ref());
    }
    Ok(scanner.finish())
}

/// Parse a trace from any buffered reader
///
/// A read error part way through discards everything scanned so far, so a
/// truncated series is never mistaken for a complete one.
///
/// # Errors
/// * `ParseError::Read` - the reader failed (including invalid UTF-8)
/// * `ParseError::Config` - invalid window or node configuration
pub fn parse_reader<R: BufRead>(reader: R, config: &TraceConfig) -> Result<ParsedTrace, ParseError> {
    let mut scanner = TraceScanner::new(*config)?;

    for line in reader.lines() {
        let line = line.map_err(|source| ParseError::Read {
            lines_read: scanner.counts.lines_read,
            source,
        })?;
        scanner.feed(&line);
    }

    Ok(scanner.finish())
}

/// Parse a trace file from disk
///
/// **Public** - used by commands
///
/// # Errors
/// * `ParseError::Unreadable` - file missing or not openable
/// * `ParseError::Read` - I/O failure while reading
/// * `ParseError::Config` - invalid window or node configuration
pub fn parse_trace_file(path: impl AsRef<Path>, config: &TraceConfig) -> Result<ParsedTrace, ParseError> {
    let path = path.as_ref();
    info!("Parsing file: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_reader(BufReader::new(file), config)?;

    info!(
        "Throughput data points for {}: {}",
        path.display(),
        parsed.counts.throughput_points
    );
    info!(
        "Delay data points for {}: {}",
        path.display(),
        parsed.counts.delay_points
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(kind: &str, t: f64, from: i64, to: i64, size: u64, seq: &str) -> String {
        format!("{} {} {} {} tcp {} ------- 1 0.0 1.0 {} 0", kind, t, from, to, size, seq)
    }

    #[test]
    fn test_counts_track_skipped_lines() {
        let lines = vec![
            line("+", 0.0, 0, 1, 500, "1"),
            "garbage".to_string(),
            String::new(),
            "r x 0 1 tcp 500 ------- 1 0.0 1.0 1 0".to_string(),
            line("r", 0.05, 0, 1, 500, "1"),
        ];

        let parsed = parse_lines(&lines, &TraceConfig::default()).unwrap();
        assert_eq!(parsed.counts.lines_read, 5);
        assert_eq!(parsed.counts.records_parsed, 2);
        assert_eq!(parsed.counts.lines_skipped, 3);
        assert_eq!(parsed.counts.throughput_points, 1);
        assert_eq!(parsed.counts.delay_points, 1);
    }

    #[test]
    fn test_receive_at_other_node_ignored() {
        let lines = vec![line("r", 0.05, 1, 2, 500, "1")];
        let parsed = parse_lines(&lines, &TraceConfig::default()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_send_from_other_node_not_tracked() {
        let lines = vec![line("+", 0.0, 2, 1, 500, "1"), line("r", 0.05, 0, 1, 500, "1")];
        let parsed = parse_lines(&lines, &TraceConfig::default()).unwrap();
        assert!(parsed.delay.is_empty());
        assert_eq!(parsed.throughput.len(), 1);
    }

    #[test]
    fn test_dequeue_and_drop_ignored() {
        let lines = vec![line("-", 0.01, 0, 1, 500, "1"), line("d", 0.02, 0, 1, 500, "1")];
        let parsed = parse_lines(&lines, &TraceConfig::default()).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.counts.records_parsed, 2);
    }

    #[test]
    fn test_custom_nodes() {
        let config = TraceConfig::new().with_nodes(2, 3);
        let lines = vec![line("+", 0.0, 2, 3, 100, "5"), line("r", 0.02, 2, 3, 100, "5")];
        let parsed = parse_lines(&lines, &config).unwrap();
        assert_eq!(parsed.delay.len(), 1);
        assert_eq!(parsed.throughput.len(), 1);
    }

    #[test]
    fn test_invalid_window_rejected() {
        let config = TraceConfig::new().with_window(0.0);
        assert!(parse_lines(Vec::<String>::new(), &config).is_err());
    }

    #[test]
    fn test_parse_reader_invalid_utf8_is_fatal() {
        let mut bytes = line("r", 0.05, 0, 1, 500, "1").into_bytes();
        bytes.extend_from_slice(b"\n\xff\xfe\n");
        let result = parse_reader(&bytes[..], &TraceConfig::default());
        assert!(matches!(result, Err(ParseError::Read { lines_read: 1, .. })));
    }
}
