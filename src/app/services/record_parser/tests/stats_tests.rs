//! Tests for parsing statistics functionality

use super::super::stats::ParseStats;
use crate::constants::MAX_RECORDED_ERRORS;

#[test]
fn test_parse_stats_calculation() {
    let mut stats = ParseStats::new();
    for _ in 0..3 {
        stats.record_parsed();
    }
    stats.record_skipped("bad fine");

    assert_eq!(stats.total_records, 4);
    assert_eq!(stats.success_rate(), 75.0);
    assert_eq!(stats.skip_rate(), 25.0);
    assert_eq!(stats.errors, vec!["Record 4: bad fine".to_string()]);
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_records, 0);
    assert_eq!(empty_stats.records_parsed, 0);
    assert_eq!(empty_stats.records_skipped, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert_eq!(empty_stats.skip_rate(), 0.0);
}

#[test]
fn test_parse_stats_error_list_is_bounded() {
    let mut stats = ParseStats::new();
    for i in 0..(MAX_RECORDED_ERRORS + 25) {
        stats.record_skipped(format!("reason {}", i));
    }

    assert_eq!(stats.records_skipped, MAX_RECORDED_ERRORS + 25);
    assert_eq!(stats.errors.len(), MAX_RECORDED_ERRORS);
}
