//! Descriptive statistics over a finished throughput series.
//!
//! Everything here is pure and total: an empty series yields the all-zero
//! summary and no input produces NaN from an empty division.

use super::throughput::ThroughputSample;
use crate::utils::config::BITS_PER_BYTE;
use log::debug;
use serde::{Deserialize, Serialize};

/// Summary statistics for one throughput series
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThroughputStats {
    /// Mean throughput (Mbps)
    pub mean: f64,

    /// Median throughput (Mbps)
    pub median: f64,

    /// Peak bucket (Mbps)
    pub max: f64,

    /// Lowest bucket (Mbps)
    pub min: f64,

    /// Population standard deviation (Mbps)
    pub std: f64,

    /// Data transferred (MB)
    pub total_data: f64,

    /// Span between first and last bucket start (seconds)
    pub duration: f64,
}

impl ThroughputStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Mean: {:.2} Mbps | Median: {:.2} | Max: {:.2} | Min: {:.2} | Std: {:.2} | {:.2} MB over {:.2}s",
            self.mean, self.median, self.max, self.min, self.std, self.total_data, self.duration
        )
    }
}

/// Calculate statistics for a throughput series
///
/// **Public** - main entry point for the summarizer
///
/// # Arguments
/// * `samples` - Throughput series in Mbps
/// * `window_secs` - Bucket width the series was built with
///
/// # Returns
/// Statistics snapshot; all zero when `samples` is empty
pub fn summarize(samples: &[ThroughputSample], window_secs: f64) -> ThroughputStats {
    if samples.is_empty() {
        return ThroughputStats::default();
    }

    let values: Vec<f64> = samples.iter().map(|s| s.mbps).collect();
    let count = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = sum / count;

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    let first = samples.iter().map(|s| s.time).fold(f64::INFINITY, f64::min);
    let last = samples.iter().map(|s| s.time).fold(f64::NEG_INFINITY, f64::max);

    let stats = ThroughputStats {
        mean,
        median: median(&values),
        max,
        min,
        std: variance.sqrt(),
        total_data: sum * window_secs / BITS_PER_BYTE,
        duration: last - first,
    };

    debug!("Summarized {} buckets: {}", samples.len(), stats.summary());
    stats
}

/// Median with linear interpolation between the middle pair
///
/// **Private** - internal helper for summarize; `values` must be non-empty
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percentage by which `candidate_mean` exceeds `baseline_mean`
///
/// Undefined, and therefore `None`, when the baseline mean is zero.
pub fn improvement_percent(candidate_mean: f64, baseline_mean: f64) -> Option<f64> {
    if baseline_mean == 0.0 {
        return None;
    }
    Some((candidate_mean - baseline_mean) / baseline_mean * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(f64, f64)]) -> Vec<ThroughputSample> {
        values
            .iter()
            .map(|&(time, mbps)| ThroughputSample { time, mbps })
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_series_is_all_zero() {
        let stats = summarize(&[], 0.1);
        assert_eq!(stats, ThroughputStats::default());
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.duration, 0.0);
    }

    #[test]
    fn test_single_point() {
        let stats = summarize(&series(&[(0.3, 4.0)]), 0.1);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, 4.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.duration, 0.0);
        assert!(close(stats.total_data, 0.05));
    }

    #[test]
    fn test_even_count_median_interpolates() {
        let stats = summarize(&series(&[(0.1, 4.0), (0.2, 1.0), (0.3, 3.0), (0.4, 2.0)]), 0.1);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, 1.0);
        assert!(close(stats.std, 1.25_f64.sqrt()));
        assert!(close(stats.duration, 0.3));
        assert!(close(stats.total_data, 10.0 * 0.1 / 8.0));
    }

    #[test]
    fn test_population_std() {
        let stats = summarize(
            &series(&[(0.0, 2.0), (0.1, 4.0), (0.2, 4.0), (0.3, 4.0), (0.4, 5.0), (0.5, 5.0), (0.6, 7.0), (0.7, 9.0)]),
            0.1,
        );
        assert_eq!(stats.mean, 5.0);
        assert!(close(stats.std, 2.0));
    }

    #[test]
    fn test_improvement_percent() {
        assert_eq!(improvement_percent(15.0, 10.0), Some(50.0));
        assert_eq!(improvement_percent(5.0, 10.0), Some(-50.0));
        assert_eq!(improvement_percent(5.0, 0.0), None);
    }
}
