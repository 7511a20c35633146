//! `urlsize --target/--source` – inspect targets and print or write results.

use anyhow::Result;
use urlsize_core::config::UrlsizeConfig;
use urlsize_core::probe;
use urlsize_core::report::{self, ReportEntry};
use urlsize_core::source;
use urlsize_core::target::Target;

use crate::cli::Cli;

/// Builds the target list from `--target` and `--source`, probes each in
/// order, prints error lines, and dumps or writes the successful results.
pub fn run_inspect(cli: &Cli, cfg: &UrlsizeConfig) -> Result<()> {
    let mut pending: Vec<Target> = Vec::new();
    if let Some(url) = &cli.target {
        pending.push(Target::new(url));
    }
    if let Some(path) = &cli.source {
        pending.extend(source::read_targets(path)?);
    }

    // Sequential on purpose: one request in flight at a time.
    let results: Vec<Target> = if pending.is_empty() {
        vec![probe::inspect_none()]
    } else {
        pending
            .into_iter()
            .map(|target| {
                tracing::debug!("inspecting {}", target.url());
                probe::inspect(target, cfg)
            })
            .collect()
    };

    let mut entries: Vec<ReportEntry> = Vec::new();
    for target in &results {
        if target.has_errors() {
            for err in target.errors() {
                if target.url().is_empty() {
                    println!("{err}");
                } else {
                    println!("{}: {}", target.url(), err);
                }
            }
        } else {
            entries.push(ReportEntry::from(target));
        }
    }

    match &cli.dest {
        Some(path) => {
            report::write_report(path, &entries)?;
            println!("Wrote {} result(s) to {}", entries.len(), path.display());
        }
        None => {
            for entry in &entries {
                println!("{}: {}", entry.url, entry.size);
            }
        }
    }

    Ok(())
}
