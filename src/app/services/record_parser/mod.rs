//! Record parsers for the three municipal datasets
//!
//! Every parser turns raw text into validated records and drops malformed
//! rows instead of failing. Only structural problems with a whole file
//! (invalid JSON, a non-array document, missing property columns) become
//! errors.
//!
//! ## Architecture
//!
//! - [`violation_parser`] - Parking violations in CSV and JSON form
//! - [`population_parser`] - Whitespace-delimited ZIP population lines
//! - [`property_parser`] - Property assessment CSV with a header row
//! - [`column_mapping`] - Locating required property columns by name
//! - [`field_parsers`] - Per-field validation helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use zipstats::app::services::record_parser::parse_population;
//!
//! let result = parse_population("15213 1000\n15217 oops\n");
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.stats.records_skipped, 1);
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod population_parser;
pub mod property_parser;
pub mod stats;
pub mod violation_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use population_parser::parse_population;
pub use property_parser::parse_properties;
pub use stats::{ParseResult, ParseStats};
pub use violation_parser::{parse_violations_csv, parse_violations_json};
