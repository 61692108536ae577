//! Dataset loading with format detection
//!
//! Reads dataset files from disk and hands their content to the matching
//! record parser. Violation files are dispatched on extension; population
//! and property files each have a single format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::record_parser::{
    ParseResult, ParseStats, parse_population, parse_properties, parse_violations_csv,
    parse_violations_json,
};
use crate::app::models::{PopulationRecord, PropertyRecord, ViolationRecord};
use crate::constants::HIGH_SKIP_RATE_PERCENT;
use crate::{Error, Result};

/// Supported parking violation file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationFormat {
    Csv,
    Json,
}

impl ViolationFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::unsupported_format(path)),
        }
    }
}

/// Locations of the three input datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub violations: PathBuf,
    pub properties: PathBuf,
    pub population: PathBuf,
}

impl DatasetPaths {
    pub fn new(
        violations: impl Into<PathBuf>,
        properties: impl Into<PathBuf>,
        population: impl Into<PathBuf>,
    ) -> Self {
        Self {
            violations: violations.into(),
            properties: properties.into(),
            population: population.into(),
        }
    }
}

/// Load parking violations, choosing CSV or JSON by extension
pub async fn load_violations(path: &Path) -> Result<ParseResult<ViolationRecord>> {
    let format = ViolationFormat::from_path(path)?;
    let content = read_dataset(path).await?;

    let result = match format {
        ViolationFormat::Csv => parse_violations_csv(&content),
        ViolationFormat::Json => parse_violations_json(&content, path)?,
    };
    report_load("violations", path, &result.stats);
    Ok(result)
}

/// Load population counts
pub async fn load_population(path: &Path) -> Result<ParseResult<PopulationRecord>> {
    let content = read_dataset(path).await?;
    let result = parse_population(&content);
    report_load("population", path, &result.stats);
    Ok(result)
}

/// Load property assessments
pub async fn load_properties(path: &Path) -> Result<ParseResult<PropertyRecord>> {
    let content = read_dataset(path).await?;
    let result = parse_properties(&content, path)?;
    report_load("properties", path, &result.stats);
    Ok(result)
}

/// Read a whole dataset file into memory
///
/// Invalid UTF-8 is replaced rather than rejected, so it only affects the
/// rows that contain it.
async fn read_dataset(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!("{} contains invalid UTF-8; affected rows may be skipped", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn report_load(dataset: &str, path: &Path, stats: &ParseStats) {
    info!(
        "Loaded {} {} records from {} ({} skipped)",
        stats.records_parsed,
        dataset,
        path.display(),
        stats.records_skipped
    );

    if stats.total_records > 0 && stats.skip_rate() > HIGH_SKIP_RATE_PERCENT {
        warn!(
            "High skip rate for {}: {:.1}% of {} records dropped",
            path.display(),
            stats.skip_rate(),
            stats.total_records
        );
    }
}
