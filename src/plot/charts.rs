//! Ready-made charts for throughput and delay series.

use super::generator::{generate_line_chart, PlotConfig, PlotSeries, BLUE, RED};
use crate::aggregator::{improvement_percent, summarize, DelaySample, ThroughputSample};
use crate::utils::error::PlotError;

/// A named variant's series, borrowed for rendering
#[derive(Debug, Clone, Copy)]
pub struct Variant<'a> {
    pub name: &'a str,
    pub window_secs: f64,
    pub throughput: &'a [ThroughputSample],
    pub delay: &'a [DelaySample],
}

/// BBR is drawn in blue, everything else in red
pub fn variant_color(name: &str) -> &'static str {
    if name.eq_ignore_ascii_case("bbr") {
        BLUE
    } else {
        RED
    }
}

fn throughput_points(samples: &[ThroughputSample]) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (s.time, s.mbps)).collect()
}

fn delay_points(samples: &[DelaySample]) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (s.time, s.delay)).collect()
}

/// Throughput of one variant with its mean line and a stats box
pub fn throughput_chart(variant: &Variant) -> Result<String, PlotError> {
    if variant.throughput.is_empty() {
        return Err(PlotError::EmptySeries);
    }

    let stats = summarize(variant.throughput, variant.window_secs);
    let series = PlotSeries::new(
        format!("TCP {}", variant.name),
        variant_color(variant.name),
        throughput_points(variant.throughput),
    )
    .with_mean(stats.mean, format!("Mean: {:.2} Mbps", stats.mean));

    let config = PlotConfig::new()
        .with_title(format!("TCP {} Throughput", variant.name))
        .with_annotation(format!(
            "Mean: {:.2} Mbps\nMedian: {:.2} Mbps\nMax: {:.2} Mbps",
            stats.mean, stats.median, stats.max
        ));

    generate_line_chart(&[series], &config)
}

/// Sentence describing which variant has the higher mean throughput
///
/// `None` when either series is empty or the baseline mean is zero.
pub fn improvement_text(candidate: &Variant, baseline: &Variant) -> Option<String> {
    if candidate.throughput.is_empty() || baseline.throughput.is_empty() {
        return None;
    }

    let candidate_mean = summarize(candidate.throughput, candidate.window_secs).mean;
    let baseline_mean = summarize(baseline.throughput, baseline.window_secs).mean;
    let improvement = improvement_percent(candidate_mean, baseline_mean)?;

    Some(if improvement > 0.0 {
        format!("{} outperforms {} by {:.1}%", candidate.name, baseline.name, improvement)
    } else {
        format!("{} outperforms {} by {:.1}%", baseline.name, candidate.name, -improvement)
    })
}

/// Both variants' throughput on one chart
///
/// Candidate is blue, baseline red. A variant with no data is left out.
pub fn comparison_chart(candidate: &Variant, baseline: &Variant) -> Result<String, PlotError> {
    let mut series = Vec::new();

    for (variant, color) in [(candidate, BLUE), (baseline, RED)] {
        if variant.throughput.is_empty() {
            continue;
        }
        let mean = summarize(variant.throughput, variant.window_secs).mean;
        series.push(
            PlotSeries::new(
                format!("TCP {}", variant.name),
                color,
                throughput_points(variant.throughput),
            )
            .with_mean(mean, format!("{} Mean: {:.2} Mbps", variant.name, mean)),
        );
    }

    let mut config = PlotConfig::new()
        .with_size(1200, 600)
        .with_title(format!(
            "TCP Throughput Comparison: {} vs {}",
            candidate.name, baseline.name
        ));
    if let Some(text) = improvement_text(candidate, baseline) {
        config = config.with_annotation(text);
    }

    generate_line_chart(&series, &config)
}

/// End-to-end delay of both variants
pub fn delay_chart(candidate: &Variant, baseline: &Variant) -> Result<String, PlotError> {
    let series = [
        PlotSeries::new(format!("TCP {}", candidate.name), BLUE, delay_points(candidate.delay)),
        PlotSeries::new(format!("TCP {}", baseline.name), RED, delay_points(baseline.delay)),
    ];

    let config = PlotConfig::new()
        .with_size(1200, 600)
        .with_title("End-to-End Delay Comparison")
        .with_labels("Time (seconds)", "Delay (seconds)");

    generate_line_chart(&series, &config)
}
