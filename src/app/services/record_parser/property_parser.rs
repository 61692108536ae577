//! Property assessment CSV parsing
//!
//! The header row locates the three columns of interest; every other column
//! is ignored. Measurements are optional per field, so a row is only dropped
//! when it is too short to reach the required columns.

use csv::StringRecord;
use std::path::Path;
use tracing::debug;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{FieldResult, normalize_zip_code, parse_optional_positive};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::PropertyRecord;
use crate::{Error, Result};

/// Parse property assessment CSV content
///
/// An empty file yields no records. A header lacking `market_value`,
/// `total_livable_area` or `zip_code` fails the load.
pub fn parse_properties(content: &str, path: &Path) -> Result<ParseResult<PropertyRecord>> {
    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    if content.trim().is_empty() {
        return Ok(ParseResult { records, stats });
    }

    // Each physical line is read on its own so an unbalanced quote cannot
    // swallow the rows after it
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let headers = lines
        .next()
        .map(read_csv_line)
        .transpose()
        .map_err(|e| Error::csv_parsing(path, "Failed to read CSV header", Some(e)))?
        .ok_or_else(|| Error::csv_parsing(path, "Missing CSV header", None))?;
    let mapping = ColumnMapping::analyze(&headers, path)?;
    debug!(
        "Property columns: market_value={}, total_livable_area={}, zip_code={}",
        mapping.market_value, mapping.total_livable_area, mapping.zip_code
    );

    for line in lines {
        let outcome = read_csv_line(line)
            .map_err(|e| format!("CSV parse error: {}", e))
            .and_then(|record| parse_property_record(&record, &mapping));

        match outcome {
            Ok(record) => {
                records.push(record);
                stats.record_parsed();
            }
            Err(reason) => {
                debug!("Skipped property row {}: {}", stats.total_records + 1, reason);
                stats.record_skipped(reason);
            }
        }
    }

    Ok(ParseResult { records, stats })
}

/// Read a single CSV line, honouring quotes within that line only
fn read_csv_line(line: &str) -> std::result::Result<StringRecord, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// Build a property record from one data row
pub fn parse_property_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> FieldResult<PropertyRecord> {
    if record.len() < mapping.required_width() {
        return Err(format!(
            "Row has {} fields, needs at least {}",
            record.len(),
            mapping.required_width()
        ));
    }

    let field = |index: usize| record.get(index).unwrap_or_default();

    Ok(PropertyRecord::new(
        parse_optional_positive(field(mapping.market_value)),
        parse_optional_positive(field(mapping.total_livable_area)),
        normalize_zip_code(field(mapping.zip_code)),
    ))
}
