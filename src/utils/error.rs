//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single trace line was discarded
///
/// Never escapes the scan; the line is skipped and counted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("field {index} is not a valid {kind}: {value:?}")]
    InvalidNumber {
        index: usize,
        kind: &'static str,
        value: String,
    },

    #[error("timestamp must be finite and non-negative, got {0}")]
    InvalidTimestamp(f64),
}

/// Errors that abort a whole trace parse
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot open trace file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading trace after {lines_read} lines: {source}")]
    Read {
        lines_read: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parser configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors in user-supplied analysis parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("window must be a positive, finite number of seconds (got {0})")]
    InvalidWindow(f64),

    #[error("source and destination node are both {0}")]
    SameNode(i64),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No series with data to plot")]
    EmptySeries,

    #[error("Chart dimensions too small: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
