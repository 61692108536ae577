//! Tests for population file parsing

use crate::app::services::record_parser::parse_population;

#[test]
fn test_population_basic() {
    let result = parse_population("15213 1000\n15217\t2000\n19103   0 extra tokens\n");

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.records[0].zip_code(), "15213");
    assert_eq!(result.records[0].population(), 1000);
    assert_eq!(result.records[1].population(), 2000);
    assert_eq!(result.records[2].zip_code(), "19103");
    assert_eq!(result.records[2].population(), 0);
}

#[test]
fn test_population_malformed_lines_skipped() {
    let content = "15213\n15217 -4\n19103 lots\n19104 12.5\n19106 300\n";
    let result = parse_population(content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].zip_code(), "19106");
    assert_eq!(result.stats.records_skipped, 4);
}

#[test]
fn test_population_blank_lines_not_counted() {
    let result = parse_population("\n   \n15213 10\n\t\n");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.total_records, 1);
    assert_eq!(result.stats.records_skipped, 0);
}

#[test]
fn test_population_duplicates_retained() {
    let result = parse_population("15213 10\n15213 20\n");

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[1].population(), 20);
}

#[test]
fn test_population_leading_whitespace() {
    let result = parse_population("   15213    42   \n");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].zip_code(), "15213");
    assert_eq!(result.records[0].population(), 42);
}

#[test]
fn test_population_empty_content() {
    let result = parse_population("");
    assert!(result.records.is_empty());
    assert_eq!(result.stats.success_rate(), 0.0);
}

#[test]
fn test_population_out_of_range_counts_skipped() {
    let content = "15213 9000000000000000000\n15217 9000000000000000000\n15218 4294967295\n";
    let result = parse_population(content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].zip_code(), "15218");
    assert_eq!(result.stats.records_skipped, 2);
}
