//! LocDetail CLI - Command-line interface
//!
//! Drives the location detail screen core from a terminal: the console
//! stands in for the screen and a simulated widget stands in for the map.

mod commands;
mod console;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use locdetail::logging::{default_log_dir, default_log_file, init_logging};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "locdetail")]
#[command(version, about = "Show a location's details and mark it on a map", long_about = None)]
struct Cli {
    /// Directory for the log file
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify and format a time-until-arrival
    Arrival(commands::arrival::ArrivalArgs),
    /// Open the detail screen for a location record
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_dir = cli
        .log_dir
        .unwrap_or_else(|| PathBuf::from(default_log_dir()));
    let guard = match init_logging(&log_dir, default_log_file()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    let result = match cli.command {
        Commands::Arrival(args) => commands::arrival::run(args),
        Commands::Show(args) => commands::show::run(args),
    };

    if let Err(e) = result {
        // Flush the log file before exiting.
        drop(guard);
        e.exit();
    }
}
