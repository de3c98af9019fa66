//! Compare command implementation.
//!
//! The compare command:
//! 1. Parses the candidate and baseline traces independently
//! 2. Summarizes both throughput series
//! 3. Renders per-variant, comparison and delay charts
//! 4. Prints the statistics report and writes the JSON report
//!
//! A trace that cannot be read contributes empty series; the other trace is
//! still processed.

use super::models::{throughput_plot_name, CompareArgs};
use crate::aggregator::improvement_percent;
use crate::output::{write_report, write_svg};
use crate::parser::{parse_trace_file, to_report, ComparisonReport, ParsedTrace, TraceReport};
use crate::plot::{comparison_chart, delay_chart, generate_text_summary, throughput_chart, Variant};
use crate::utils::config::{TraceConfig, COMPARISON_PLOT_FILE, DELAY_PLOT_FILE, SCHEMA_VERSION};
use crate::utils::error::PlotError;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Neither trace could be read
/// * Chart or report write errors
pub fn execute_compare(args: CompareArgs) -> Result<ComparisonReport> {
    let start_time = Instant::now();

    info!(
        "Comparing {} ({}) against {} ({})",
        args.candidate_name,
        args.candidate_trace.display(),
        args.baseline_name,
        args.baseline_trace.display()
    );

    // Step 1: Parse both traces
    info!("Step 1/4: Parsing traces...");
    let (candidate_parsed, candidate) = load_variant(&args.candidate_trace, &args.candidate_name, &args.config);
    let (baseline_parsed, baseline) = load_variant(&args.baseline_trace, &args.baseline_name, &args.config);

    if candidate.error.is_some() && baseline.error.is_some() {
        anyhow::bail!("Neither trace could be read");
    }

    // Step 2: Statistics
    info!("Step 2/4: Calculating statistics...");
    let improvement = improvement_percent(candidate.stats.mean, baseline.stats.mean);
    match improvement {
        Some(pct) => info!("{} vs {}: {:+.2}% mean throughput", candidate.variant, baseline.variant, pct),
        None => warn!("{} mean throughput is zero, improvement undefined", baseline.variant),
    }

    // Step 3: Charts
    if args.plots {
        info!("Step 3/4: Rendering charts...");
        let candidate_view = as_variant(&candidate.variant, &candidate_parsed);
        let baseline_view = as_variant(&baseline.variant, &baseline_parsed);
        write_charts(&args.out_dir, &candidate_view, &baseline_view)?;
    } else {
        info!("Step 3/4: Skipping charts (not requested)");
    }

    // Step 4: Reports
    info!("Step 4/4: Writing reports...");
    if args.print_summary {
        println!(
            "\n{}",
            generate_text_summary(&candidate.variant, &candidate.stats, &baseline.variant, &baseline.stats)
        );
    }

    let report = ComparisonReport {
        version: SCHEMA_VERSION.to_string(),
        candidate,
        baseline,
        improvement_percent: improvement,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write comparison JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    info!("Comparison completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Parse one trace, degrading to empty series on failure
///
/// **Private** - keeps a failed trace from aborting the comparison
fn load_variant(path: &Path, name: &str, config: &TraceConfig) -> (ParsedTrace, TraceReport) {
    let trace_name = path.display().to_string();

    match parse_trace_file(path, config) {
        Ok(parsed) => {
            let report = to_report(name, &trace_name, &parsed);
            (parsed, report)
        }
        Err(e) => {
            error!("Error parsing file {}: {}", trace_name, e);
            let parsed = ParsedTrace::empty(config.window_secs);
            let mut report = to_report(name, &trace_name, &parsed);
            report.error = Some(e.to_string());
            (parsed, report)
        }
    }
}

fn as_variant<'a>(name: &'a str, parsed: &'a ParsedTrace) -> Variant<'a> {
    Variant {
        name,
        window_secs: parsed.window_secs,
        throughput: &parsed.throughput,
        delay: &parsed.delay,
    }
}

/// Render and write every chart that has data
///
/// **Private** - internal helper for execute_compare
fn write_charts(out_dir: &Path, candidate: &Variant, baseline: &Variant) -> Result<()> {
    for variant in [candidate, baseline] {
        if variant.throughput.is_empty() {
            continue;
        }
        let svg = throughput_chart(variant)
            .with_context(|| format!("Failed to render {} throughput chart", variant.name))?;
        write_svg(&svg, out_dir.join(throughput_plot_name(variant.name)))?;
    }

    match comparison_chart(candidate, baseline) {
        Ok(svg) => write_svg(&svg, out_dir.join(COMPARISON_PLOT_FILE))?,
        Err(PlotError::EmptySeries) => warn!("No throughput data in either trace, skipping comparison chart"),
        Err(e) => return Err(e).context("Failed to render comparison chart"),
    }

    if !candidate.delay.is_empty() && !baseline.delay.is_empty() {
        let svg = delay_chart(candidate, baseline).context("Failed to render delay chart")?;
        write_svg(&svg, out_dir.join(DELAY_PLOT_FILE))?;
    } else {
        info!("Delay data missing for a variant, skipping delay chart");
    }

    Ok(())
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.candidate_name.trim().is_empty() || args.baseline_name.trim().is_empty() {
        anyhow::bail!("Variant names cannot be empty");
    }

    if args.candidate_name == args.baseline_name {
        anyhow::bail!("Variant names must differ (both are '{}')", args.candidate_name);
    }

    args.config.validate()?;

    Ok(())
}
