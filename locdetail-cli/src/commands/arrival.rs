//! `locdetail arrival` - classify and format a duration.

use std::path::PathBuf;

use clap::Args;
use locdetail::arrival::classify;

use super::common::load_config;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct ArrivalArgs {
    /// Time until arrival in milliseconds (negative means unavailable)
    #[arg(allow_negative_numbers = true)]
    pub millis: i64,

    /// Configuration file (defaults to ~/.locdetail/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ArrivalArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let breakdown = classify(args.millis);

    println!("Category: {}", breakdown.category);
    println!("Arrival:  {}", breakdown.format(&config.labels));
    Ok(())
}
