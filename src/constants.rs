//! Application constants for ZIP statistics
//!
//! This module contains dataset column names, default values and
//! configuration keys used throughout the application.

// =============================================================================
// Violation Dataset
// =============================================================================

/// Number of comma-separated fields in a violation CSV row
pub const VIOLATION_CSV_FIELD_COUNT: usize = 7;

/// Keys every violation JSON object must carry
pub mod violation_json_keys {
    pub const TICKET_NUMBER: &str = "ticket_number";
    pub const PLATE_ID: &str = "plate_id";
    pub const DATE: &str = "date";
    pub const ZIP_CODE: &str = "zip_code";
    pub const VIOLATION: &str = "violation";
    pub const FINE: &str = "fine";
    pub const STATE: &str = "state";

    pub const ALL: &[&str] = &[TICKET_NUMBER, PLATE_ID, DATE, ZIP_CODE, VIOLATION, FINE, STATE];
}

/// Default plate-issuing jurisdiction counted by fines per capita
pub const DEFAULT_JURISDICTION: &str = "PA";

// =============================================================================
// Property Dataset
// =============================================================================

/// Property CSV header columns
pub mod property_columns {
    pub const MARKET_VALUE: &str = "market_value";
    pub const TOTAL_LIVABLE_AREA: &str = "total_livable_area";
    pub const ZIP_CODE: &str = "zip_code";

    pub const REQUIRED: &[&str] = &[MARKET_VALUE, TOTAL_LIVABLE_AREA, ZIP_CODE];
}

/// Property ZIP codes are truncated to this many characters
pub const ZIP_CODE_LENGTH: usize = 5;

// =============================================================================
// Diagnostics
// =============================================================================

/// Skip rate (percent) above which a dataset load logs a warning
pub const HIGH_SKIP_RATE_PERCENT: f64 = 50.0;

/// Maximum number of per-row error messages retained in parse statistics
pub const MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Configuration
// =============================================================================

/// Application directory name under the user config directory
pub const APP_CONFIG_DIR: &str = "zipstats";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "ZIPSTATS_LOG_LEVEL";

/// Environment variable overriding the counted jurisdiction
pub const ENV_JURISDICTION: &str = "ZIPSTATS_JURISDICTION";

/// Default log level when neither config nor flags say otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted log level names
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
