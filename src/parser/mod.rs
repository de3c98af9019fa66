//! Trace parsing and report schema definitions.
//!
//! This module handles:
//! - Positional extraction of ns-2 trace records
//! - The single-pass scan that drives the aggregators
//! - Defining output schema

pub mod ns_trace;
pub mod record;
pub mod schema;

// Re-export main types
pub use ns_trace::{parse_lines, parse_reader, parse_trace_file, ParseCounts, ParsedTrace, TraceScanner};
pub use record::{parse_record, EventKind, TraceEvent};
pub use schema::{to_report, ComparisonReport, TraceReport};
