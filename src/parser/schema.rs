//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use super::ns_trace::{ParseCounts, ParsedTrace};
use crate::aggregator::{summarize, DelaySample, ThroughputSample, ThroughputStats};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Analysis of a single trace, as written by `analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Congestion control variant label (e.g. "BBR")
    pub variant: String,

    /// Trace file the series came from
    pub trace_file: String,

    /// Throughput bucket width (seconds)
    pub window_secs: f64,

    pub counts: ParseCounts,

    pub stats: ThroughputStats,

    pub throughput: Vec<ThroughputSample>,

    pub delay: Vec<DelaySample>,

    /// Set when the trace could not be read; series are then empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Two variants side by side, as written by `compare`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub version: String,

    pub candidate: TraceReport,

    pub baseline: TraceReport,

    /// Candidate mean over baseline mean, in percent; absent when the
    /// baseline mean is zero
    #[serde(default)]
    pub improvement_percent: Option<f64>,

    pub generated_at: String,
}

/// Convert parsed trace data to the output report format
///
/// **Public** - used by commands to create final output
pub fn to_report(variant: &str, trace_file: &str, parsed: &ParsedTrace) -> TraceReport {
    use chrono::Utc;

    TraceReport {
        version: SCHEMA_VERSION.to_string(),
        variant: variant.to_string(),
        trace_file: trace_file.to_string(),
        window_secs: parsed.window_secs,
        counts: parsed.counts,
        stats: summarize(&parsed.throughput, parsed.window_secs),
        throughput: parsed.throughput.clone(),
        delay: parsed.delay.clone(),
        error: None,
        generated_at: Utc::now().to_rfc3339(),
    }
}
