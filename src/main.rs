use clap::Parser;
use std::process;
use zipstats::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments; clap exits with usage on a bad argument count
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime
        .block_on(commands::run(args))
        .map_err(anyhow::Error::from);

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
