//! TCP Trace Studio
//!
//! Throughput and end-to-end delay analysis for ns-2 style TCP
//! simulation traces, with side-by-side comparison of two
//! congestion control variants (e.g. BBR against Reno).
//!
//! This crate provides the core implementation for the
//! `tcp-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! tcp-trace compare --candidate bbr_trace.tr --baseline reno_trace.tr
//! tcp-trace analyze --trace bbr_trace.tr --name BBR --plot bbr.svg
//! ```
//!
//! ## Library use
//!
//! ```
//! use tcp_trace_studio::aggregator::summarize;
//! use tcp_trace_studio::parser::parse_lines;
//! use tcp_trace_studio::utils::TraceConfig;
//!
//! let lines = [
//!     "+ 0.000 0 1 tcp 500 ------- 1 0.0 1.0 1 1",
//!     "r 0.050 0 1 tcp 500 ------- 1 0.0 1.0 1 1",
//! ];
//! let config = TraceConfig::default();
//! let parsed = parse_lines(lines, &config)?;
//! assert_eq!(parsed.delay.len(), 1);
//!
//! let stats = summarize(&parsed.throughput, config.window_secs);
//! assert!((stats.mean - 0.04).abs() < 1e-9);
//! # Ok::<(), tcp_trace_studio::utils::ConfigError>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;
