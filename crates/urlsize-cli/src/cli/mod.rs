//! CLI for the urlsize remote-size inspector.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use urlsize_core::config;

use commands::run_inspect;

/// Top-level CLI: flags only, no subcommands. Running with no arguments
/// prints the usage text.
#[derive(Debug, Parser)]
#[command(name = "urlsize")]
#[command(
    about = "Determine the byte size of remote resources via header-only requests",
    long_about = None
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Single URL to inspect.
    #[arg(short = 't', long = "target", value_name = "URL")]
    pub target: Option<String>,

    /// File containing a JSON array of target URLs.
    #[arg(short = 's', long = "source", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Write results as a JSON array to FILE instead of the screen dump.
    #[arg(short = 'd', long = "dest", value_name = "FILE")]
    pub dest: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    run_inspect(&cli, &cfg)
}

#[cfg(test)]
mod tests;
