//! Column mapping for the property assessment header
//!
//! Assessment exports carry dozens of columns in no fixed order; only three
//! are needed. This module locates them by exact (trimmed) name.

use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;

use crate::constants::property_columns;
use crate::{Error, Result};

/// Indices of the required property columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub market_value: usize,
    pub total_livable_area: usize,
    pub zip_code: usize,
}

impl ColumnMapping {
    /// Analyze the header row and locate the required columns
    ///
    /// Fails when any of `market_value`, `total_livable_area` or `zip_code`
    /// is missing, since the join key or both metrics would be undefined.
    pub fn analyze(headers: &StringRecord, path: &Path) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated header names
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let missing: Vec<String> = property_columns::REQUIRED
            .iter()
            .filter(|name| !name_to_index.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::missing_columns(path, missing));
        }

        let index_of = |name: &str| name_to_index[name];
        Ok(Self {
            market_value: index_of(property_columns::MARKET_VALUE),
            total_livable_area: index_of(property_columns::TOTAL_LIVABLE_AREA),
            zip_code: index_of(property_columns::ZIP_CODE),
        })
    }

    /// Minimum number of fields a data row needs to reach every required column
    pub fn required_width(&self) -> usize {
        self.market_value
            .max(self.total_livable_area)
            .max(self.zip_code)
            + 1
    }
}
