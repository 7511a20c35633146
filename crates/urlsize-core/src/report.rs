//! Result records and JSON report writing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::target::Target;

/// One output record: the URL and its human-readable size.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub url: String,
    pub size: String,
}

impl From<&Target> for ReportEntry {
    fn from(target: &Target) -> Self {
        Self {
            url: target.url().to_string(),
            size: target.formatted_size(),
        }
    }
}

/// Writes the results as a pretty-printed JSON array of `{url, size}`
/// objects to `path`, replacing any existing file.
pub fn write_report(path: &Path, entries: &[ReportEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!("wrote {} result(s) to {}", entries.len(), path.display());
    Ok(())
}
