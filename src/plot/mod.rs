//! Chart and text report rendering.
//!
//! Converts throughput and delay series into SVG line charts and
//! statistics into a human-readable report.

pub mod charts;
pub mod generator;
pub mod summary;

// Re-export main types
pub use charts::{comparison_chart, delay_chart, improvement_text, throughput_chart, variant_color, Variant};
pub use generator::{generate_line_chart, PlotConfig, PlotSeries};
pub use summary::{format_variant_stats, generate_text_summary};
