//! TCP Trace Studio CLI
//!
//! Extracts throughput and delay series from ns-2 simulation traces
//! and compares two congestion control variants.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use tcp_trace_studio::commands::{
    analyze, compare, display_schema, display_version, execute_analyze, execute_compare,
    validate_report_file, AnalyzeArgs, CompareArgs,
};
use tcp_trace_studio::utils::config::{
    TraceConfig, DEFAULT_BASELINE_NAME, DEFAULT_BASELINE_TRACE, DEFAULT_CANDIDATE_NAME,
    DEFAULT_CANDIDATE_TRACE, DEFAULT_DEST_NODE, DEFAULT_SOURCE_NODE, DEFAULT_WINDOW_SECS,
};

/// TCP Trace Studio - throughput and delay analysis for ns-2 traces
#[derive(Parser, Debug)]
#[command(name = "tcp-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every command that parses traces
#[derive(Args, Debug)]
struct TraceOpts {
    /// Throughput window width in seconds
    #[arg(short, long, env = "TCP_TRACE_WINDOW", default_value_t = DEFAULT_WINDOW_SECS)]
    window: f64,

    /// Node whose enqueue (+) events mark packets as sent
    #[arg(long, default_value_t = DEFAULT_SOURCE_NODE)]
    source_node: i64,

    /// Node whose receive (r) events are measured
    #[arg(long, default_value_t = DEFAULT_DEST_NODE)]
    dest_node: i64,
}

impl TraceOpts {
    fn to_config(&self) -> TraceConfig {
        TraceConfig::new()
            .with_window(self.window)
            .with_nodes(self.source_node, self.dest_node)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single trace
    Analyze {
        /// Trace file to parse
        #[arg(short, long)]
        trace: PathBuf,

        /// Variant label (e.g. BBR, Reno)
        #[arg(short, long, default_value = DEFAULT_CANDIDATE_NAME)]
        name: String,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for SVG throughput chart (optional)
        #[arg(short, long)]
        plot: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        opts: TraceOpts,
    },

    /// Compare two variants' traces
    Compare {
        /// Trace of the variant being evaluated
        #[arg(long, default_value = DEFAULT_CANDIDATE_TRACE)]
        candidate: PathBuf,

        #[arg(long, default_value = DEFAULT_CANDIDATE_NAME)]
        candidate_name: String,

        /// Trace of the reference variant
        #[arg(long, default_value = DEFAULT_BASELINE_TRACE)]
        baseline: PathBuf,

        #[arg(long, default_value = DEFAULT_BASELINE_NAME)]
        baseline_name: String,

        /// Directory for SVG charts
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Output path for JSON comparison report (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long)]
        no_plots: bool,

        #[command(flatten)]
        opts: TraceOpts,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            trace,
            name,
            output,
            plot,
            summary,
            opts,
        } => {
            let args = AnalyzeArgs {
                trace,
                name,
                output_json: output,
                output_svg: plot,
                config: opts.to_config(),
                print_summary: summary,
            };

            analyze::validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Compare {
            candidate,
            candidate_name,
            baseline,
            baseline_name,
            out_dir,
            json,
            no_plots,
            opts,
        } => {
            let args = CompareArgs {
                candidate_trace: candidate,
                candidate_name,
                baseline_trace: baseline,
                baseline_name,
                out_dir,
                output_json: json,
                plots: !no_plots,
                print_summary: true,
                config: opts.to_config(),
            };

            compare::validate_args(&args)?;
            execute_compare(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
