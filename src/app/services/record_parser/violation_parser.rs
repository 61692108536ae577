//! Parking violation parsing for CSV and JSON exports
//!
//! Both variants apply the same per-record policy: all seven fields present
//! and non-empty, an RFC 3339 timestamp, and a finite non-negative fine. A
//! record failing any check is skipped and counted; only structural problems
//! with the whole file are returned as errors.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::field_parsers::{
    FieldResult, parse_fine, parse_required_text, parse_timestamp, validate_fine,
};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::ViolationRecord;
use crate::constants::{VIOLATION_CSV_FIELD_COUNT, violation_json_keys as keys};
use crate::{Error, Result};

// =============================================================================
// CSV
// =============================================================================

/// Parse violation CSV content
///
/// Rows are `timestamp,fine,description,plate_id,jurisdiction,ticket_id,zip_code`
/// with a plain comma separator and no header. Rows with any other field
/// count are skipped.
pub fn parse_violations_csv(content: &str) -> ParseResult<ViolationRecord> {
    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        match parse_csv_fields(&fields) {
            Ok(record) => {
                records.push(record);
                stats.record_parsed();
            }
            Err(reason) => {
                debug!("Skipped violation row {}: {}", stats.total_records + 1, reason);
                stats.record_skipped(reason);
            }
        }
    }

    ParseResult { records, stats }
}

/// Validate the fields of one CSV row
fn parse_csv_fields(fields: &[&str]) -> FieldResult<ViolationRecord> {
    if fields.len() != VIOLATION_CSV_FIELD_COUNT {
        return Err(format!(
            "Expected {} fields, found {}",
            VIOLATION_CSV_FIELD_COUNT,
            fields.len()
        ));
    }

    let timestamp = parse_required_text(fields[0], "timestamp")?;
    let fine = parse_required_text(fields[1], "fine")?;
    let description = parse_required_text(fields[2], "description")?;
    let plate_id = parse_required_text(fields[3], "plate_id")?;
    let jurisdiction = parse_required_text(fields[4], "jurisdiction")?;
    let ticket_id = parse_required_text(fields[5], "ticket_id")?;
    let zip_code = parse_required_text(fields[6], "zip_code")?;

    Ok(ViolationRecord::new(
        parse_timestamp(timestamp)?,
        parse_fine(fine)?,
        description,
        plate_id,
        jurisdiction,
        ticket_id,
        zip_code,
    ))
}

// =============================================================================
// JSON
// =============================================================================

/// Parse violation JSON content
///
/// The document must be an array; anything else fails the whole load. Each
/// element must be an object carrying all seven keys with non-null values.
pub fn parse_violations_json(content: &str, path: &Path) -> Result<ParseResult<ViolationRecord>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| Error::json_format(path, format!("Invalid JSON: {}", e), Some(e)))?;

    let Value::Array(elements) = document else {
        return Err(Error::json_format(
            path,
            "Top-level value is not an array",
            None,
        ));
    };

    let mut stats = ParseStats::new();
    let mut records = Vec::with_capacity(elements.len());

    for element in &elements {
        let outcome = match element {
            Value::Object(object) => parse_json_object(object),
            other => Err(format!("Expected an object, found {}", json_type_name(other))),
        };

        match outcome {
            Ok(record) => {
                records.push(record);
                stats.record_parsed();
            }
            Err(reason) => {
                debug!("Skipped violation element {}: {}", stats.total_records + 1, reason);
                stats.record_skipped(reason);
            }
        }
    }

    Ok(ParseResult { records, stats })
}

/// Validate one JSON violation object
fn parse_json_object(object: &Map<String, Value>) -> FieldResult<ViolationRecord> {
    for key in keys::ALL {
        match object.get(*key) {
            None => return Err(format!("Missing key '{}'", key)),
            Some(Value::Null) => return Err(format!("Null value for key '{}'", key)),
            Some(_) => {}
        }
    }

    let date = json_string(object, keys::DATE)?;
    let fine = json_fine(object)?;
    let violation = json_text(object, keys::VIOLATION)?;
    let plate_id = json_text(object, keys::PLATE_ID)?;
    let state = json_text(object, keys::STATE)?;
    let ticket_number = json_text(object, keys::TICKET_NUMBER)?;
    let zip_code = json_text(object, keys::ZIP_CODE)?;

    Ok(ViolationRecord::new(
        parse_timestamp(&date)?,
        fine,
        violation,
        plate_id,
        state,
        ticket_number,
        zip_code,
    ))
}

/// Extract a field that must be a JSON string
fn json_string(object: &Map<String, Value>, key: &str) -> FieldResult<String> {
    match object.get(key) {
        Some(Value::String(s)) => parse_required_text(s, key).map(str::to_string),
        Some(other) => Err(format!(
            "Expected a string for '{}', found {}",
            key,
            json_type_name(other)
        )),
        None => Err(format!("Missing key '{}'", key)),
    }
}

/// Extract a text field; JSON numbers are accepted in their literal form
fn json_text(object: &Map<String, Value>, key: &str) -> FieldResult<String> {
    match object.get(key) {
        Some(Value::String(s)) => parse_required_text(s, key).map(str::to_string),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(format!(
            "Expected a string or number for '{}', found {}",
            key,
            json_type_name(other)
        )),
        None => Err(format!("Missing key '{}'", key)),
    }
}

/// Extract the fine from a JSON number or numeric string
fn json_fine(object: &Map<String, Value>) -> FieldResult<f64> {
    match object.get(keys::FINE) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("Fine '{}' is not representable", n))
            .and_then(validate_fine),
        Some(Value::String(s)) => parse_fine(parse_required_text(s, keys::FINE)?),
        Some(other) => Err(format!(
            "Expected a number for '{}', found {}",
            keys::FINE,
            json_type_name(other)
        )),
        None => Err(format!("Missing key '{}'", keys::FINE)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
