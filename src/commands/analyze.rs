//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Parses a single trace file
//! 2. Summarizes the throughput series
//! 3. Renders a throughput chart
//! 4. Writes output files

use super::models::AnalyzeArgs;
use crate::output::{write_report, write_svg};
use crate::parser::{parse_trace_file, to_report, TraceReport};
use crate::plot::{format_variant_stats, throughput_chart, Variant};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file missing or unreadable
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<TraceReport> {
    let start_time = Instant::now();

    info!("Analyzing {} trace: {}", args.name, args.trace.display());

    // Step 1: Parse trace
    info!("Step 1/3: Parsing trace data...");
    let parsed = parse_trace_file(&args.trace, &args.config)
        .with_context(|| format!("Failed to parse trace {}", args.trace.display()))?;

    debug!(
        "Parsed trace: {} lines read, {} skipped",
        parsed.counts.lines_read, parsed.counts.lines_skipped
    );

    // Step 2: Summarize
    info!("Step 2/3: Calculating statistics...");
    let trace_name = args.trace.display().to_string();
    let report = to_report(&args.name, &trace_name, &parsed);
    info!("{}: {}", args.name, report.stats.summary());

    // Step 3: Write outputs
    info!("Step 3/3: Writing output files...");

    if let Some(svg_path) = &args.output_svg {
        let variant = Variant {
            name: &args.name,
            window_secs: parsed.window_secs,
            throughput: &parsed.throughput,
            delay: &parsed.delay,
        };
        if parsed.throughput.is_empty() {
            warn!("No throughput data in {}, skipping chart", trace_name);
        } else {
            let svg = throughput_chart(&variant).context("Failed to generate throughput chart")?;
            write_svg(&svg, svg_path).context("Failed to write throughput chart")?;
        }
    }

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", format_variant_stats(&args.name, &report.stats));
        println!("  Delay Samples: {}", report.delay.len());
    }

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("Variant name cannot be empty");
    }

    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    args.config.validate()?;

    Ok(())
}
