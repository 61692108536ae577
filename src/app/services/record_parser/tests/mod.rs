//! Test utilities for record parser testing
//!
//! This module provides sample dataset content shared across the parser
//! test modules.

mod population_tests;
mod stats_tests;
mod violation_tests;

/// Violation CSV with three valid rows and one of each common defect
pub fn create_test_violations_csv() -> String {
    r#"2023-05-01T12:00:00Z,50,METER EXPIRED,ABC123,PA,T1,15213
2023-05-01T13:30:00Z,75,OVER TIME LIMIT,DEF456,PA,T2,15213
2023-05-02T08:15:00Z,100,BUS ONLY ZONE,GHI789,NJ,T3,15217
2023-05-02T09:00:00Z,-5,NEGATIVE FINE,JKL012,PA,T4,15217
not-a-date,20,BAD TIMESTAMP,MNO345,PA,T5,15217
2023-05-03T10:00:00Z,30,TOO FEW FIELDS,PA,T6
2023-05-03T11:00:00Z,30,EMPTY PLATE, ,PA,T7,15213"#
        .to_string()
}

/// Violation JSON with the same content as the CSV sample's valid rows
pub fn create_test_violations_json() -> String {
    r#"[
  {"ticket_number": "T1", "plate_id": "ABC123", "date": "2023-05-01T12:00:00Z",
   "zip_code": "15213", "violation": "METER EXPIRED", "fine": 50, "state": "PA"},
  {"ticket_number": "T2", "plate_id": "DEF456", "date": "2023-05-01T13:30:00Z",
   "zip_code": "15213", "violation": "OVER TIME LIMIT", "fine": 75, "state": "PA"},
  {"ticket_number": "T3", "plate_id": "GHI789", "date": "2023-05-02T08:15:00Z",
   "zip_code": "15217", "violation": "BUS ONLY ZONE", "fine": 100, "state": "NJ"}
]"#
    .to_string()
}

/// Property CSV with shuffled columns and a mix of usable and unusable values
pub fn create_test_properties_csv() -> String {
    r#"parcel_number,zip_code,owner,total_livable_area,market_value
1,152133301,"SMITH, JOHN",1000,100000
2,15213,DOE JANE,2000,300000
3,15213,EMPTY VALUE,1500,
4,15217,NEGATIVE AREA,-10,250000
5,,NO ZIP,800,90000
6,15217"#
        .to_string()
}
