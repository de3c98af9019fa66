use crate::utils::config::{
    TraceConfig, DEFAULT_BASELINE_NAME, DEFAULT_BASELINE_TRACE, DEFAULT_CANDIDATE_NAME,
    DEFAULT_CANDIDATE_TRACE,
};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Trace file to parse
    pub trace: PathBuf,

    /// Variant label used in charts and the report
    pub name: String,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG throughput chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Window and node selection
    pub config: TraceConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::from(DEFAULT_CANDIDATE_TRACE),
            name: DEFAULT_CANDIDATE_NAME.to_string(),
            output_json: None,
            output_svg: None,
            config: TraceConfig::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub candidate_trace: PathBuf,
    pub candidate_name: String,

    pub baseline_trace: PathBuf,
    pub baseline_name: String,

    /// Directory receiving the SVG charts
    pub out_dir: PathBuf,

    /// Output path for JSON comparison report (optional)
    pub output_json: Option<PathBuf>,

    /// Render SVG charts
    pub plots: bool,

    /// Print statistics report to stdout
    pub print_summary: bool,

    pub config: TraceConfig,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            candidate_trace: PathBuf::from(DEFAULT_CANDIDATE_TRACE),
            candidate_name: DEFAULT_CANDIDATE_NAME.to_string(),
            baseline_trace: PathBuf::from(DEFAULT_BASELINE_TRACE),
            baseline_name: DEFAULT_BASELINE_NAME.to_string(),
            out_dir: PathBuf::from("."),
            output_json: None,
            plots: true,
            print_summary: true,
            config: TraceConfig::default(),
        }
    }
}

/// File name for a variant's own throughput chart, e.g. `bbr_throughput.svg`
pub fn throughput_plot_name(variant: &str) -> String {
    let slug: String = variant
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}_throughput.svg", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_plot_name() {
        assert_eq!(throughput_plot_name("BBR"), "bbr_throughput.svg");
        assert_eq!(throughput_plot_name("New Reno"), "new_reno_throughput.svg");
    }
}
