//! Command implementations for the zipstats CLI
//!
//! This module contains the main command execution logic: configuration
//! loading, logging setup, the interactive menu loop and single queries.

use crate::app::services::zip_statistics::{Statistic, ZipStatistics};
use crate::cli::args::Args;
use crate::cli::render;
use crate::config::{Config, OutputFormat};
use crate::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Main command runner for zipstats
///
/// 1. Load and validate configuration
/// 2. Set up logging
/// 3. Run a single statistic if one was requested, otherwise the interactive menu
pub async fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = load_configuration(&args)?;
    setup_logging(&config.logging.level, args.quiet);

    info!("Starting zipstats");
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let stats = ZipStatistics::from_config(args.dataset_paths(), &config);
    let format = config.output.format;

    match args.get_statistic()? {
        Some(statistic) => {
            let stdout = io::stdout();
            run_query(
                &stats,
                statistic,
                args.zip_code.as_deref(),
                format,
                &mut stdout.lock(),
            )
            .await
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&stats, stdin.lock(), stdout.lock(), format).await
        }
    }
}

/// Set up structured logging on stderr so stdout carries only results
fn setup_logging(level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zipstats={}", level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .init();
    }

    debug!("Logging initialized at level: {}", level);
}

/// Load configuration using layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let config_file = match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let mut config = Config::load_layered(config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
    if let Some(jurisdiction) = &args.jurisdiction {
        config.query.jurisdiction = jurisdiction.trim().to_string();
    }
    if args.no_cache {
        config.cache.enabled = false;
    }
    if let Some(format) = args.output_format {
        config.output.format = format;
    }
}

/// Run one statistic and print its result
pub async fn run_query<W: Write>(
    stats: &ZipStatistics,
    statistic: Statistic,
    zip_code: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if statistic.requires_zip() && zip_code.is_none() {
        warn!("No ZIP code given for '{}'", statistic);
    }

    let result = stats.evaluate(statistic, zip_code).await?;
    render::write_result(out, statistic, zip_code, &result, format)?;
    Ok(())
}

/// Interactive menu loop
///
/// Reads menu choices (and ZIP codes where needed) from `input` until `0` or
/// end of input. Dataset errors are reported and the loop continues; any
/// other error ends the session.
pub async fn run_interactive<R: BufRead, W: Write>(
    stats: &ZipStatistics,
    mut input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<()> {
    loop {
        render::write_menu(&mut out)?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };
        let statistic = match choice.parse::<u8>() {
            Ok(0) => break,
            Ok(number) => match Statistic::from_menu_number(number) {
                Ok(statistic) => statistic,
                Err(e) => {
                    render::write_error(&mut out, &e)?;
                    continue;
                }
            },
            Err(_) => {
                render::write_error(&mut out, &format!("'{}' is not a menu number", choice))?;
                continue;
            }
        };

        let zip_code = if statistic.requires_zip() {
            render::write_zip_prompt(&mut out)?;
            match read_line(&mut input)? {
                Some(zip_code) => Some(zip_code),
                None => break,
            }
        } else {
            None
        };

        match stats.evaluate(statistic, zip_code.as_deref()).await {
            Ok(result) => {
                render::write_result(&mut out, statistic, zip_code.as_deref(), &result, format)?
            }
            Err(e) if e.is_dataset_error() => {
                warn!("{} failed: {}", statistic, e);
                render::write_error(&mut out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }

    debug!("Cache statistics: {:?}", stats.cache_stats());
    Ok(())
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
