//! Field parsing utilities for dataset records
//!
//! Each helper validates one raw field and returns a reason string on failure.
//! Callers turn failures into row skips; nothing here ever produces a
//! dataset-level error.

use chrono::{DateTime, Utc};

use crate::constants::ZIP_CODE_LENGTH;

/// Outcome of validating a single field
pub type FieldResult<T> = std::result::Result<T, String>;

/// Trim a required text field, rejecting empty values
pub fn parse_required_text<'a>(value: &'a str, field_name: &str) -> FieldResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("Empty value for required field '{}'", field_name));
    }
    Ok(trimmed)
}

/// Minute-precision instant such as `2023-05-01T12:00Z`
const MINUTE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

/// Parse an ISO-8601 instant such as `2023-05-01T12:00:00Z`
///
/// Seconds may be omitted. Date and time must be joined by an uppercase `T`.
pub fn parse_timestamp(value: &str) -> FieldResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.as_bytes().get(10) != Some(&b'T') {
        return Err(format!(
            "Invalid timestamp '{}': expected 'T' between date and time",
            value
        ));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|e| DateTime::parse_from_str(trimmed, MINUTE_PRECISION_FORMAT).map_err(|_| e))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp '{}': {}", value, e))
}

/// Parse a fine amount: finite and non-negative
pub fn parse_fine(value: &str) -> FieldResult<f64> {
    let trimmed = value.trim();
    let fine = trimmed
        .parse::<f64>()
        .map_err(|e| format!("Invalid fine '{}': {}", trimmed, e))?;
    validate_fine(fine)
}

/// Range check shared by text and numeric fine fields
pub fn validate_fine(fine: f64) -> FieldResult<f64> {
    if !fine.is_finite() {
        return Err(format!("Fine '{}' is not a finite number", fine));
    }
    if fine < 0.0 {
        return Err(format!("Negative fine {}", fine));
    }
    Ok(fine)
}

/// Parse a population count: an integer from zero up to `u32::MAX`
///
/// The cap keeps any realistic sum of counts within `u64`.
pub fn parse_population_count(value: &str) -> FieldResult<u64> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<i64>()
        .map_err(|e| format!("Invalid population '{}': {}", trimmed, e))?;
    if parsed < 0 {
        return Err(format!("Negative population {}", parsed));
    }
    u32::try_from(parsed)
        .map(u64::from)
        .map_err(|_| format!("Population {} out of range", parsed))
}

/// Parse an optional positive measurement
///
/// Empty, non-numeric, non-finite and non-positive values are all treated as
/// absent rather than as zero.
pub fn parse_optional_positive(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Normalize a property ZIP code to its first five characters
///
/// Returns `None` when the trimmed value is empty.
pub fn normalize_zip_code(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(ZIP_CODE_LENGTH).collect())
}
