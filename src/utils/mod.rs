//! Utility modules for configuration, error handling, and logging.

pub mod error;
pub mod config;

// Re-export commonly used types for convenience
pub use config::TraceConfig;
pub use error::{ConfigError, OutputError, ParseError, PlotError, RecordError};
