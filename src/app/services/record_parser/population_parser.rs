//! Population file parsing
//!
//! Lines are `<zip> <population> ...` separated by any run of whitespace.

use tracing::debug;

use super::field_parsers::{FieldResult, parse_population_count, parse_required_text};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::PopulationRecord;

/// Parse population text content
///
/// Blank lines are ignored without being counted. Lines with fewer than two
/// tokens, an empty ZIP or a negative or non-integer population are skipped.
/// Duplicate ZIP codes are kept as separate records.
pub fn parse_population(content: &str) -> ParseResult<PopulationRecord> {
    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_population_line(line) {
            Ok(record) => {
                records.push(record);
                stats.record_parsed();
            }
            Err(reason) => {
                debug!("Skipped population line {}: {}", stats.total_records + 1, reason);
                stats.record_skipped(reason);
            }
        }
    }

    ParseResult { records, stats }
}

fn parse_population_line(line: &str) -> FieldResult<PopulationRecord> {
    let mut tokens = line.split_whitespace();
    let (Some(zip_token), Some(population_token)) = (tokens.next(), tokens.next()) else {
        return Err("Expected a ZIP code and a population".to_string());
    };

    let zip_code = parse_required_text(zip_token, "zip_code")?;
    let population = parse_population_count(population_token)?;
    Ok(PopulationRecord::new(zip_code, population))
}
