use tcp_trace_studio::aggregator::{summarize, ThroughputStats};
use tcp_trace_studio::parser::{parse_lines, parse_reader, parse_trace_file, ParsedTrace};
use tcp_trace_studio::utils::{ParseError, TraceConfig};
use std::io::Write;

fn send(t: f64, size: u64, seq: &str) -> String {
    format!("+ {} 0 1 tcp {} ------- 1 0.0 1.0 {} 0", t, size, seq)
}

fn recv(t: f64, size: u64, seq: &str) -> String {
    format!("r {} 0 1 tcp {} ------- 1 0.0 1.0 {} 0", t, size, seq)
}

fn parse(lines: &[String]) -> ParsedTrace {
    parse_lines(lines, &TraceConfig::default()).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_single_send_receive_pair() {
    let parsed = parse(&[send(0.0, 500, "1"), recv(0.05, 500, "1")]);

    assert_eq!(parsed.delay.len(), 1);
    assert_close(parsed.delay[0].time, 0.05);
    assert_close(parsed.delay[0].delay, 0.05);

    assert_eq!(parsed.throughput.len(), 1);
    assert_close(parsed.throughput[0].time, 0.0);
    assert_close(parsed.throughput[0].mbps, 0.04);
}

#[test]
fn test_gap_between_receives_is_zero_filled() {
    let parsed = parse(&[recv(0.05, 100, "1"), recv(0.35, 100, "2")]);

    // The window at 0 is closed while still at start 0, so it is not
    // emitted; the windows at 0.1 and 0.2 are silent.
    let times: Vec<f64> = parsed.throughput.iter().map(|s| s.time).collect();
    let values: Vec<f64> = parsed.throughput.iter().map(|s| s.mbps).collect();
    assert_eq!(times.len(), 3);
    assert_close(times[0], 0.1);
    assert_close(times[1], 0.2);
    assert_close(times[2], 0.3);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[1], 0.0);
    assert_close(values[2], 0.008);
}

#[test]
fn test_gap_buckets_spaced_by_window() {
    let parsed = parse(&[recv(0.15, 100, "1"), recv(0.95, 100, "2")]);

    for pair in parsed.throughput.windows(2) {
        assert!(pair[1].time > pair[0].time);
        assert_close(pair[1].time - pair[0].time, 0.1);
    }
    let zeros = parsed.throughput.iter().filter(|s| s.mbps == 0.0).count();
    // Windows 0.2 .. 0.8 lie strictly between the two receives
    assert_eq!(zeros, 7);
}

#[test]
fn test_receive_without_send_counts_throughput_only() {
    let parsed = parse(&[recv(0.05, 1000, "77")]);
    assert!(parsed.delay.is_empty());
    assert_eq!(parsed.throughput.len(), 1);
    assert_close(parsed.throughput[0].mbps, 0.08);
}

#[test]
fn test_empty_input() {
    let parsed = parse(&[]);
    assert!(parsed.throughput.is_empty());
    assert!(parsed.delay.is_empty());
    assert_eq!(summarize(&parsed.throughput, 0.1), ThroughputStats::default());
}

#[test]
fn test_resend_overwrites_pending_send() {
    let parsed = parse(&[
        send(0.0, 500, "4"),
        send(0.2, 500, "4"),
        recv(0.25, 500, "4"),
        recv(0.26, 500, "4"),
    ]);

    assert_eq!(parsed.delay.len(), 1);
    assert_close(parsed.delay[0].delay, 0.05);
}

#[test]
fn test_flush_emits_exactly_one_final_bucket() {
    let parsed = parse(&[recv(0.15, 100, "1"), recv(0.25, 100, "2"), recv(0.27, 100, "3")]);

    // 0.25 closes [0.1, 0.2]; the final window holds two packets
    assert_eq!(parsed.throughput.len(), 2);
    assert_close(parsed.throughput[0].mbps, 0.008);
    assert_close(parsed.throughput[1].time, 0.2);
    assert_close(parsed.throughput[1].mbps, 0.016);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let parsed = parse(&[
        "".to_string(),
        "r 0.05 0 1 tcp".to_string(),
        "r abc 0 1 tcp 500 ------- 1 0.0 1.0 1 0".to_string(),
        "r 0.05 0 1 tcp -5 ------- 1 0.0 1.0 1 0".to_string(),
        recv(0.05, 500, "1"),
    ]);

    assert_eq!(parsed.counts.lines_skipped, 4);
    assert_eq!(parsed.counts.records_parsed, 1);
    assert_eq!(parsed.throughput.len(), 1);
}

#[test]
fn test_parse_is_deterministic() {
    let lines: Vec<String> = (0..200)
        .flat_map(|i| {
            let t = i as f64 * 0.013;
            let seq = i.to_string();
            vec![send(t, 1040, &seq), recv(t + 0.04, 1040, &seq)]
        })
        .collect();

    assert_eq!(parse(&lines), parse(&lines));
}

#[test]
fn test_window_is_configurable() {
    let config = TraceConfig::new().with_window(1.0);
    let lines = [recv(0.5, 1000, "1"), recv(2.5, 1000, "2")];
    let parsed = parse_lines(&lines, &config).unwrap();

    assert_eq!(parsed.window_secs, 1.0);
    let times: Vec<f64> = parsed.throughput.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![1.0, 2.0]);
    assert_close(parsed.throughput[1].mbps, 0.008);

    let stats = summarize(&parsed.throughput, config.window_secs);
    assert_close(stats.total_data, 0.008 * 1.0 / 8.0);
}

#[test]
fn test_parse_reader_matches_parse_lines() {
    let lines = [send(0.0, 500, "1"), recv(0.05, 500, "1"), recv(0.31, 700, "2")];
    let text = lines.join("\n");

    let from_reader = parse_reader(text.as_bytes(), &TraceConfig::default()).unwrap();
    assert_eq!(from_reader, parse(&lines));
}

#[test]
fn test_parse_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", send(0.0, 500, "1")).unwrap();
    writeln!(file, "{}", recv(0.05, 500, "1")).unwrap();

    let parsed = parse_trace_file(file.path(), &TraceConfig::default()).unwrap();
    assert_eq!(parsed.counts.lines_read, 2);
    assert_eq!(parsed.counts.delay_points, 1);
    assert_eq!(parsed.counts.throughput_points, 1);
}

#[test]
fn test_missing_file_is_distinct_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_trace_file(dir.path().join("nope.tr"), &TraceConfig::default());
    assert!(matches!(result, Err(ParseError::Unreadable { .. })));
}

#[test]
fn test_empty_file_is_not_an_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let parsed = parse_trace_file(file.path(), &TraceConfig::default()).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_oversized_packets_do_not_abort_parse() {
    let size = u64::MAX / 2 + 1;
    let parsed = parse(&[recv(0.01, size, "1"), recv(0.02, size, "2")]);

    assert_eq!(parsed.counts.records_parsed, 2);
    assert_eq!(parsed.throughput.len(), 1);
    assert!(parsed.throughput[0].mbps.is_finite());
    assert!(parsed.throughput[0].mbps > 0.0);
}
