//! Data models for ZIP statistics
//!
//! This module contains the validated record types produced by the parsers.
//! Records are immutable once constructed: fields are private and exposed
//! through accessors, so aggregation code can only read them.

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Parking Violation
// =============================================================================

/// A single parking ticket
///
/// All text fields are trimmed and non-empty; the fine is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationRecord {
    timestamp: DateTime<Utc>,
    fine: f64,
    description: String,
    plate_id: String,
    jurisdiction: String,
    ticket_id: String,
    zip_code: String,
}

impl ViolationRecord {
    /// Build a record from already-validated fields
    pub fn new(
        timestamp: DateTime<Utc>,
        fine: f64,
        description: impl Into<String>,
        plate_id: impl Into<String>,
        jurisdiction: impl Into<String>,
        ticket_id: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            fine,
            description: description.into(),
            plate_id: plate_id.into(),
            jurisdiction: jurisdiction.into(),
            ticket_id: ticket_id.into(),
            zip_code: zip_code.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn fine(&self) -> f64 {
        self.fine
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Vehicle identifier (license plate)
    pub fn plate_id(&self) -> &str {
        &self.plate_id
    }

    /// Plate-issuing state or province code
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// The seven fields in violation CSV column order
    ///
    /// Numeric and timestamp fields are rendered in canonical form, so this
    /// round-trips through the CSV parser.
    pub fn to_csv_fields(&self) -> [String; 7] {
        [
            self.timestamp.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
            self.fine.to_string(),
            self.description.clone(),
            self.plate_id.clone(),
            self.jurisdiction.clone(),
            self.ticket_id.clone(),
            self.zip_code.clone(),
        ]
    }
}

// =============================================================================
// Population
// =============================================================================

/// Population count for one ZIP code line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRecord {
    zip_code: String,
    population: u64,
}

impl PopulationRecord {
    pub fn new(zip_code: impl Into<String>, population: u64) -> Self {
        Self {
            zip_code: zip_code.into(),
            population,
        }
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn population(&self) -> u64 {
        self.population
    }
}

// =============================================================================
// Property Assessment
// =============================================================================

/// One property assessment row
///
/// Each field is independently optional: a row with an unusable market value
/// still contributes its livable area, and vice versa. Values that are present
/// are always positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    market_value: Option<f64>,
    total_livable_area: Option<f64>,
    zip_code: Option<String>,
}

impl PropertyRecord {
    pub fn new(
        market_value: Option<f64>,
        total_livable_area: Option<f64>,
        zip_code: Option<String>,
    ) -> Self {
        Self {
            market_value,
            total_livable_area,
            zip_code,
        }
    }

    pub fn market_value(&self) -> Option<f64> {
        self.market_value
    }

    pub fn total_livable_area(&self) -> Option<f64> {
        self.total_livable_area
    }

    /// Normalized (at most five character) ZIP code, if the row had one
    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    /// Check whether this row belongs to the given ZIP code
    pub fn in_zip(&self, zip_code: &str) -> bool {
        self.zip_code.as_deref() == Some(zip_code)
    }
}

// =============================================================================
// Query Results
// =============================================================================

/// Smallest and largest livable area seen for a ZIP code
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

impl AreaRange {
    /// Range covering a single value
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range to include `value`
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}
