//! Command-line argument definitions for zipstats
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::dataset_loader::DatasetPaths;
use crate::app::services::zip_statistics::Statistic;
use crate::config::OutputFormat;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ZIP code statistics tool
///
/// Loads parking violations, property assessments and population counts,
/// then answers per-ZIP-code questions either from an interactive menu or
/// as a single query.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zipstats",
    version,
    about = "Per-ZIP-code statistics from parking, property and population datasets",
    long_about = "Answers per-ZIP-code questions about a municipality from three flat files: \
                  parking violations (.csv or .json), property assessments (.csv with a header) \
                  and population counts (whitespace-delimited text). Without --statistic an \
                  interactive menu is shown."
)]
pub struct Args {
    /// Parking violations file (.csv or .json)
    #[arg(value_name = "PARKING_FILE")]
    pub parking_file: PathBuf,

    /// Property assessments CSV file
    #[arg(value_name = "PROPERTY_FILE")]
    pub property_file: PathBuf,

    /// Population file (`<zip> <population>` per line)
    #[arg(value_name = "POPULATION_FILE")]
    pub population_file: PathBuf,

    /// Configuration file path
    ///
    /// If not specified, <config dir>/zipstats/config.toml is used when it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Run a single statistic (1-7, numbered as in the menu) and exit
    #[arg(
        short = 's',
        long = "statistic",
        value_name = "N",
        help = "Run one statistic by menu number and exit"
    )]
    pub statistic: Option<u8>,

    /// ZIP code for --statistic
    #[arg(
        short = 'z',
        long = "zip",
        value_name = "ZIP",
        requires = "statistic",
        help = "ZIP code for a per-ZIP statistic"
    )]
    pub zip_code: Option<String>,

    /// Plate-issuing jurisdiction counted by fines per capita
    #[arg(
        long = "jurisdiction",
        value_name = "CODE",
        help = "Jurisdiction counted by fines per capita (default PA)"
    )]
    pub jurisdiction: Option<String>,

    /// Recompute average market value on every request
    #[arg(long = "no-cache", help = "Disable the average market value cache")]
    pub no_cache: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, help = "Output format for results")]
    pub output_format: Option<OutputFormat>,
}

impl Args {
    /// Validate argument combinations that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(statistic) = self.get_statistic()? {
            if self.zip_code.is_some() && !statistic.requires_zip() {
                return Err(Error::invalid_query(format!(
                    "'{}' covers every ZIP Code and does not take --zip",
                    statistic
                )));
            }
        }

        if let Some(jurisdiction) = &self.jurisdiction {
            if jurisdiction.trim().is_empty() {
                return Err(Error::configuration("Jurisdiction must not be empty"));
            }
        }

        Ok(())
    }

    /// The statistic requested with --statistic, if any
    pub fn get_statistic(&self) -> Result<Option<Statistic>> {
        self.statistic.map(Statistic::from_menu_number).transpose()
    }

    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths::new(
            &self.parking_file,
            &self.property_file,
            &self.population_file,
        )
    }

    /// Log level implied by -v/--quiet, or `None` to use the configured level
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
