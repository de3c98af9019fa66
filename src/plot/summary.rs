//! Plain-text statistics report.

use crate::aggregator::{improvement_percent, ThroughputStats};

/// Statistics block for one variant
pub fn format_variant_stats(name: &str, stats: &ThroughputStats) -> String {
    let lines = [
        format!("TCP {}:", name),
        format!("  Mean Throughput: {:.2} Mbps", stats.mean),
        format!("  Median Throughput: {:.2} Mbps", stats.median),
        format!("  Max Throughput: {:.2} Mbps", stats.max),
        format!("  Min Throughput: {:.2} Mbps", stats.min),
        format!("  Standard Deviation: {:.2} Mbps", stats.std),
        format!("  Total Data Transferred: {:.2} MB", stats.total_data),
        format!("  Duration: {:.2} seconds", stats.duration),
    ];
    lines.join("\n")
}

/// Full report for a candidate/baseline pair
///
/// The closing verdict is only printed when both means are positive.
pub fn generate_text_summary(
    candidate_name: &str,
    candidate: &ThroughputStats,
    baseline_name: &str,
    baseline: &ThroughputStats,
) -> String {
    let mut out = String::from("===== TCP Throughput Statistics =====\n\n");
    out.push_str(&format_variant_stats(candidate_name, candidate));
    out.push_str("\n\n");
    out.push_str(&format_variant_stats(baseline_name, baseline));

    if candidate.mean > 0.0 && baseline.mean > 0.0 {
        if let Some(improvement) = improvement_percent(candidate.mean, baseline.mean) {
            out.push_str("\n\n");
            if improvement > 0.0 {
                out.push_str(&format!(
                    "{} outperforms {} by {:.2}% in average throughput",
                    candidate_name, baseline_name, improvement
                ));
            } else {
                out.push_str(&format!(
                    "{} outperforms {} by {:.2}% in average throughput",
                    baseline_name, candidate_name, -improvement
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stats(mean: f64) -> ThroughputStats {
        ThroughputStats {
            mean,
            median: mean,
            max: mean * 2.0,
            min: 0.0,
            std: 1.0,
            total_data: 12.5,
            duration: 10.0,
        }
    }

    #[test]
    fn test_format_variant_stats() {
        let text = format_variant_stats("BBR", &stats(4.0));
        assert_eq!(
            text,
            "TCP BBR:\n  Mean Throughput: 4.00 Mbps\n  Median Throughput: 4.00 Mbps\n  \
             Max Throughput: 8.00 Mbps\n  Min Throughput: 0.00 Mbps\n  \
             Standard Deviation: 1.00 Mbps\n  Total Data Transferred: 12.50 MB\n  \
             Duration: 10.00 seconds"
        );
    }

    #[test]
    fn test_summary_verdict() {
        let text = generate_text_summary("BBR", &stats(6.0), "Reno", &stats(4.0));
        assert!(text.ends_with("BBR outperforms Reno by 50.00% in average throughput"));

        let text = generate_text_summary("BBR", &stats(2.0), "Reno", &stats(4.0));
        assert!(text.ends_with("Reno outperforms BBR by 50.00% in average throughput"));
    }

    #[test]
    fn test_summary_without_verdict_when_a_mean_is_zero() {
        let text = generate_text_summary("BBR", &ThroughputStats::default(), "Reno", &stats(4.0));
        assert!(!text.contains("outperforms"));
        assert!(text.starts_with("===== TCP Throughput Statistics ====="));
    }
}
