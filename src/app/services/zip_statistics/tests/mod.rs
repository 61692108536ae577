//! Test utilities for ZIP statistics testing
//!
//! Provides in-memory record builders for the aggregate tests and on-disk
//! dataset fixtures for the service tests.


use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

use crate::app::models::{PopulationRecord, PropertyRecord, ViolationRecord};
use crate::app::services::dataset_loader::DatasetPaths;

pub fn violation(fine: f64, jurisdiction: &str, zip_code: &str) -> ViolationRecord {
    ViolationRecord::new(
        Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap(),
        fine,
        "METER EXPIRED",
        "ABC123",
        jurisdiction,
        "T1",
        zip_code,
    )
}

pub fn population(zip_code: &str, count: u64) -> PopulationRecord {
    PopulationRecord::new(zip_code, count)
}

pub fn property(
    market_value: Option<f64>,
    total_livable_area: Option<f64>,
    zip_code: &str,
) -> PropertyRecord {
    PropertyRecord::new(market_value, total_livable_area, Some(zip_code.to_string()))
}

/// Three properties in 15213 and one in 15217
pub fn create_test_properties() -> Vec<PropertyRecord> {
    vec![
        property(Some(100000.0), Some(1000.0), "15213"),
        property(Some(300000.0), Some(2000.0), "15213"),
        property(None, Some(1500.0), "15213"),
        property(Some(50000.0), None, "15217"),
    ]
}

pub fn create_test_population() -> Vec<PopulationRecord> {
    vec![population("15213", 1000), population("15217", 2000)]
}

/// Dataset files written to a temporary directory
pub struct TestDatasets {
    pub dir: TempDir,
    pub paths: DatasetPaths,
}

impl TestDatasets {
    pub fn remove_properties(&self) {
        fs::remove_file(&self.paths.properties).unwrap();
    }
}

/// Write the three datasets with the given violation file extension
pub fn create_test_datasets(violation_extension: &str) -> TestDatasets {
    let dir = tempfile::tempdir().unwrap();
    let violations = dir.path().join(format!("parking.{}", violation_extension));
    let properties = dir.path().join("properties.csv");
    let population = dir.path().join("population.txt");

    let violation_content = if violation_extension.eq_ignore_ascii_case("json") {
        r#"[
  {"ticket_number": "T1", "plate_id": "A1", "date": "2023-05-01T12:00:00Z",
   "zip_code": "15213", "violation": "METER", "fine": 50, "state": "PA"},
  {"ticket_number": "T2", "plate_id": "A2", "date": "2023-05-01T13:00:00Z",
   "zip_code": "15213", "violation": "METER", "fine": 75, "state": " PA "},
  {"ticket_number": "T3", "plate_id": "A3", "date": "2023-05-01T14:00:00Z",
   "zip_code": "15217", "violation": "METER", "fine": 100, "state": "PA"},
  {"ticket_number": "T4", "plate_id": "A4", "date": "2023-05-01T15:00:00Z",
   "zip_code": "15217", "violation": "METER", "fine": 999, "state": "NJ"}
]"#
    } else {
        "2023-05-01T12:00:00Z,50,METER,A1,PA,T1,15213\n\
         2023-05-01T13:00:00Z,75,METER,A2,PA,T2,15213\n\
         2023-05-01T14:00:00Z,100,METER,A3,PA,T3,15217\n\
         2023-05-01T15:00:00Z,999,METER,A4,NJ,T4,15217\n\
         garbage line\n"
    };

    fs::write(&violations, violation_content).unwrap();
    fs::write(
        &properties,
        "zip_code,market_value,total_livable_area\n\
         15213,100000,1000\n\
         15213,300000,2000\n\
         15213,,1500\n\
         15217,50000,0\n",
    )
    .unwrap();
    fs::write(&population, "15213 1000\n15217 2000\n\n15299 0\n").unwrap();

    TestDatasets {
        paths: DatasetPaths::new(violations, properties, population),
        dir,
    }
}
