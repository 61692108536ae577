//! Tests for violation CSV and JSON parsing

use super::*;
use crate::Error;
use crate::app::services::record_parser::{parse_violations_csv, parse_violations_json};
use chrono::{TimeZone, Utc};
use std::path::Path;

#[test]
fn test_csv_valid_rows_in_file_order() {
    let result = parse_violations_csv(&create_test_violations_csv());

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.records[0].ticket_id(), "T1");
    assert_eq!(result.records[1].ticket_id(), "T2");
    assert_eq!(result.records[2].ticket_id(), "T3");

    let first = &result.records[0];
    assert_eq!(
        first.timestamp(),
        Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(first.fine(), 50.0);
    assert_eq!(first.description(), "METER EXPIRED");
    assert_eq!(first.plate_id(), "ABC123");
    assert_eq!(first.jurisdiction(), "PA");
    assert_eq!(first.zip_code(), "15213");
}

#[test]
fn test_csv_malformed_rows_are_counted_not_raised() {
    let result = parse_violations_csv(&create_test_violations_csv());

    assert_eq!(result.stats.total_records, 7);
    assert_eq!(result.stats.records_parsed, 3);
    assert_eq!(result.stats.records_skipped, 4);
    assert_eq!(result.stats.errors.len(), 4);
    assert!(
        result
            .records
            .iter()
            .all(|r| !["T4", "T5", "T6", "T7"].contains(&r.ticket_id()))
    );
}

#[test]
fn test_csv_fields_are_trimmed() {
    let csv = "  2023-05-01T12:00:00Z , 12.5 , METER , ABC123 ,  PA , T1 , 15213  ";
    let result = parse_violations_csv(csv);

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.fine(), 12.5);
    assert_eq!(record.jurisdiction(), "PA");
    assert_eq!(record.zip_code(), "15213");
}

#[test]
fn test_csv_field_count_must_be_exactly_seven() {
    let csv = "2023-05-01T12:00:00Z,10,A,B,PA,T1,15213,EXTRA\n\
               2023-05-01T12:00:00Z,10,A,B,PA,T2";
    let result = parse_violations_csv(csv);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.records_skipped, 2);
}

#[test]
fn test_csv_blank_lines_ignored() {
    let csv = "\n2023-05-01T12:00:00Z,10,A,B,PA,T1,15213\n   \n\n";
    let result = parse_violations_csv(csv);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.total_records, 1);
    assert_eq!(result.stats.records_skipped, 0);
}

#[test]
fn test_csv_zero_fine_and_large_fine_accepted() {
    let csv = "2023-05-01T12:00:00Z,0,A,B,PA,T1,15213\n\
               2023-05-01T12:00:00Z,1000000,A,B,PA,T2,1";
    let result = parse_violations_csv(csv);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].fine(), 0.0);
    assert_eq!(result.records[1].zip_code(), "1");
}

#[test]
fn test_csv_non_finite_fine_rejected() {
    let csv = "2023-05-01T12:00:00Z,NaN,A,B,PA,T1,15213\n\
               2023-05-01T12:00:00Z,inf,A,B,PA,T2,15213";
    let result = parse_violations_csv(csv);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.records_skipped, 2);
}

#[test]
fn test_csv_fields_survive_reserialization() {
    let result = parse_violations_csv(&create_test_violations_csv());

    let reserialized: Vec<String> = result
        .records
        .iter()
        .map(|r| r.to_csv_fields().join(","))
        .collect();
    let reparsed = parse_violations_csv(&reserialized.join("\n"));

    assert_eq!(reparsed.records, result.records);
    assert_eq!(
        result.records[0].to_csv_fields()[0],
        "2023-05-01T12:00:00Z"
    );
}

#[test]
fn test_json_matches_csv_content() {
    let json = parse_violations_json(&create_test_violations_json(), Path::new("t.json")).unwrap();
    let csv = parse_violations_csv(&create_test_violations_csv());

    assert_eq!(json.records, csv.records);
    assert_eq!(json.stats.records_skipped, 0);
}

#[test]
fn test_json_skips_bad_elements() {
    let json = r#"[
      42,
      "not an object",
      {"ticket_number": "T1", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": "15213", "violation": "V", "fine": 10},
      {"ticket_number": "T2", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": null, "violation": "V", "fine": 10, "state": "PA"},
      {"ticket_number": "T3", "plate_id": "P", "date": "yesterday",
       "zip_code": "15213", "violation": "V", "fine": 10, "state": "PA"},
      {"ticket_number": "T4", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": "15213", "violation": "V", "fine": -1, "state": "PA"},
      {"ticket_number": "T5", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": "15213", "violation": "V", "fine": true, "state": "PA"},
      {"ticket_number": "T6", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": "15213", "violation": "  ", "fine": 10, "state": "PA"},
      {"ticket_number": "T7", "plate_id": "P", "date": "2023-05-01T12:00:00Z",
       "zip_code": "15213", "violation": "V", "fine": 10, "state": "PA"}
    ]"#;
    let result = parse_violations_json(json, Path::new("t.json")).unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].ticket_id(), "T7");
    assert_eq!(result.stats.total_records, 9);
    assert_eq!(result.stats.records_skipped, 8);
}

#[test]
fn test_json_numeric_text_fields_and_string_fine() {
    let json = r#"[
      {"ticket_number": 1234567, "plate_id": 98765, "date": "2023-05-01T12:00:00Z",
       "zip_code": 15213, "violation": "V", "fine": "36.5", "state": "PA"}
    ]"#;
    let result = parse_violations_json(json, Path::new("t.json")).unwrap();

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.ticket_id(), "1234567");
    assert_eq!(record.plate_id(), "98765");
    assert_eq!(record.zip_code(), "15213");
    assert_eq!(record.fine(), 36.5);
}

#[test]
fn test_json_date_must_be_string() {
    let json = r#"[
      {"ticket_number": "T1", "plate_id": "P", "date": 1682942400,
       "zip_code": "15213", "violation": "V", "fine": 10, "state": "PA"}
    ]"#;
    let result = parse_violations_json(json, Path::new("t.json")).unwrap();

    assert!(result.records.is_empty());
    assert_eq!(result.stats.records_skipped, 1);
}

#[test]
fn test_json_top_level_must_be_array() {
    let err = parse_violations_json(r#"{"ticket_number": "T1"}"#, Path::new("t.json"))
        .unwrap_err();
    assert!(matches!(err, Error::JsonFormat { source: None, .. }));
    assert!(err.is_dataset_error());
}

#[test]
fn test_json_invalid_document_is_dataset_error() {
    let err = parse_violations_json("[{", Path::new("t.json")).unwrap_err();
    assert!(matches!(err, Error::JsonFormat { source: Some(_), .. }));
}

#[test]
fn test_json_empty_array() {
    let result = parse_violations_json("[]", Path::new("t.json")).unwrap();
    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_records, 0);
}

#[test]
fn test_csv_minute_precision_timestamp_accepted() {
    let content = "2023-05-01T12:00Z,10,A,B,PA,T1,15213\n\
                   2023-05-01 12:00Z,10,A,B,PA,T2,15213\n";
    let result = parse_violations_csv(content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].ticket_id(), "T1");
    assert_eq!(
        result.records[0].timestamp(),
        Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(result.stats.records_skipped, 1);
}
