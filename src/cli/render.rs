//! Result formatting for the terminal
//!
//! Human output prints bare values, one statistic per line, so results can be
//! piped. JSON output wraps each result with the statistic and ZIP code it
//! answers.

use colored::*;
use serde::Serialize;
use std::io::{self, Write};

use crate::app::services::zip_statistics::{FinesPerCapita, Statistic, StatisticResult};
use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonResult<'a> {
    statistic: Statistic,
    menu_number: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip_code: Option<&'a str>,
    result: &'a StatisticResult,
}

/// Print the numbered menu and the choice prompt
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for statistic in Statistic::ALL {
        writeln!(
            out,
            "{}. {}",
            statistic.menu_number().to_string().bright_yellow().bold(),
            statistic.description()
        )?;
    }
    writeln!(out, "{}. Exit", "0".bright_yellow().bold())?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

pub fn write_zip_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Enter ZIP Code: ")?;
    out.flush()
}

pub fn write_error<W: Write>(out: &mut W, message: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".bright_red().bold(), message)
}

/// Print one statistic result in the requested format
pub fn write_result<W: Write>(
    out: &mut W,
    statistic: Statistic,
    zip_code: Option<&str>,
    result: &StatisticResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_human(out, result),
        OutputFormat::Json => {
            let payload = JsonResult {
                statistic,
                menu_number: statistic.menu_number(),
                zip_code: zip_code.map(str::trim).filter(|zip| !zip.is_empty()),
                result,
            };
            serde_json::to_writer(&mut *out, &payload)?;
            writeln!(out)
        }
    }
}

fn write_human<W: Write>(out: &mut W, result: &StatisticResult) -> io::Result<()> {
    match result {
        StatisticResult::Total(total) => writeln!(out, "{}", total),
        StatisticResult::Scalar(value) => writeln!(out, "{}", value),
        StatisticResult::PerZip(fines) => {
            for (zip_code, value) in numeric_zip_order(fines) {
                writeln!(out, "{} {:.4}", zip_code, value)?;
            }
            Ok(())
        }
        StatisticResult::Range(Some(range)) => writeln!(out, "{} {}", range.min, range.max),
        StatisticResult::Range(None) => writeln!(out, "0 0"),
    }
}

/// Entries ordered by numeric ZIP code; non-numeric codes sort last
pub fn numeric_zip_order(fines: &FinesPerCapita) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = fines
        .iter()
        .map(|(zip_code, value)| (zip_code.as_str(), *value))
        .collect();
    entries.sort_by_key(|(zip_code, _)| match zip_code.parse::<u64>() {
        Ok(number) => (false, number, *zip_code),
        Err(_) => (true, 0, *zip_code),
    });
    entries
}
