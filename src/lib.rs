//! ZIP code statistics library
//!
//! A Rust library for answering per-ZIP-code questions about a municipality
//! from three flat-file datasets: parking violations, property assessments
//! and population counts.
//!
//! This library provides tools for:
//! - Defensive parsing of CSV, JSON and whitespace-delimited inputs, dropping
//!   malformed rows instead of failing the load
//! - Loading datasets by path with extension-based format detection
//! - Seven ZIP-joined aggregate statistics (totals, averages, per-capita ratios, min/max)
//! - A single-flight memoization cache for the average market value query

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_loader;
        pub mod record_parser;
        pub mod zip_statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

// Re-export commonly used types
pub use app::models::{AreaRange, PopulationRecord, PropertyRecord, ViolationRecord};
pub use app::services::dataset_loader::{DatasetPaths, ViolationFormat};
pub use app::services::zip_statistics::{Statistic, StatisticResult, ZipStatistics};
pub use config::Config;

use std::path::{Path, PathBuf};

/// Result type alias for ZIP statistics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dataset-level failures
///
/// Row-level problems never surface here: they are counted in
/// [`ParseStats`](app::services::record_parser::ParseStats) and dropped.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File missing or unreadable
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Violation JSON is malformed or its top level is not an array
    #[error("JSON format error in file '{}': {message}", .path.display())]
    JsonFormat {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// CSV reader failed before any row could be read
    #[error("CSV parsing error in file '{}': {message}", .path.display())]
    CsvParsing {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Property header lacks one or more required columns
    #[error("Required columns missing in '{}': {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// Violation file extension is neither .csv nor .json
    #[error("Unsupported file format for '{}': only .csv or .json are allowed", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Bad menu choice or query arguments from the presentation layer
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Reading menu input or writing results failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Create an I/O error for a file path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON format error
    pub fn json_format(
        path: impl AsRef<Path>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonFormat {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        path: impl AsRef<Path>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing columns error
    pub fn missing_columns(path: impl AsRef<Path>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            path: path.as_ref().to_path_buf(),
            columns,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Whether this error came from loading a dataset
    ///
    /// The interactive menu reports these and keeps running.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::JsonFormat { .. }
                | Self::CsvParsing { .. }
                | Self::MissingColumns { .. }
                | Self::UnsupportedFormat { .. }
        )
    }
}
