//! Parsing statistics and result structures for dataset loads
//!
//! Skipped rows are never reported as errors to callers; these counters exist
//! so loads can be logged and diagnosed.

use crate::constants::MAX_RECORDED_ERRORS;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Successfully parsed records, in file order
    pub records: Vec<T>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl<T> ParseResult<T> {
    /// Drop the statistics and keep the records
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ParseStats {
    /// Number of non-blank rows or array elements encountered
    pub total_records: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of records skipped due to validation failures
    pub records_skipped: usize,

    /// First few skip reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successfully parsed record
    pub fn record_parsed(&mut self) {
        self.total_records += 1;
        self.records_parsed += 1;
    }

    /// Count a skipped record and keep its reason if there is room
    pub fn record_skipped(&mut self, reason: impl Into<String>) {
        self.total_records += 1;
        self.records_skipped += 1;
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors.push(format!("Record {}: {}", self.total_records, reason.into()));
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Calculate skip rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_skipped as f64 / self.total_records as f64) * 100.0
        }
    }
}
