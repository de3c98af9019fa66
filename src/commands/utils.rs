use crate::output::read_report;
use crate::parser::TraceReport;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use log::warn;
use std::path::PathBuf;

/// Validate a trace report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<TraceReport> {
    println!("Validating report: {}", file_path.display());

    let report: TraceReport = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        warn!(
            "Report schema v{} differs from current v{}",
            report.version,
            SCHEMA_VERSION
        );
    }

    let out_of_order = report
        .throughput
        .windows(2)
        .any(|pair| pair[1].time <= pair[0].time);
    if out_of_order {
        anyhow::bail!("Throughput buckets are not in strictly increasing time order");
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Variant: {}", report.variant);
    println!("  Trace: {}", report.trace_file);
    println!("  Window: {} s", report.window_secs);
    println!("  Throughput Points: {}", report.throughput.len());
    println!("  Delay Points: {}", report.delay.len());
    println!("  Mean Throughput: {:.2} Mbps", report.stats.mean);

    Ok(report)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("TCP Trace Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  variant: string          - Congestion control label");
        println!("  trace_file: string       - Source trace path");
        println!("  window_secs: number      - Throughput bucket width");
        println!("  counts: object           - Lines read/parsed/skipped, point counts");
        println!("  stats: object            - mean, median, max, min, std (Mbps),");
        println!("                             total_data (MB), duration (s)");
        println!("  throughput: array        - Buckets ordered by start time");
        println!("    time: number           - Bucket start (s)");
        println!("    mbps: number           - Throughput (Mbps)");
        println!("  delay: array             - Correlated packets in receive order");
        println!("    time: number           - Receive time (s)");
        println!("    delay: number          - End-to-end delay (s)");
        println!("  error: string?           - Present when the trace was unreadable");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("TCP Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Throughput and delay analysis for ns-2 TCP simulation traces.");
}
