//! JSON source file: a flat array of target URLs.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::target::Target;

/// Reads a JSON array of URL strings and builds one Target per entry.
///
/// A malformed file (unreadable, not JSON, not an array, non-string entry)
/// is a structured error that aborts before any network I/O. URL syntax is
/// not checked here; bad URLs become per-target errors during probing.
pub fn read_targets(path: &Path) -> Result<Vec<Target>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&data)
        .with_context(|| format!("source file {} is not valid JSON", path.display()))?;

    let entries = match value.as_array() {
        Some(entries) => entries,
        None => bail!(
            "source file {} must contain a JSON array of URL strings",
            path.display()
        ),
    };

    let mut targets = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str() {
            Some(url) => targets.push(Target::new(url)),
            None => bail!(
                "source file {} contains a non-string entry: {}",
                path.display(),
                entry
            ),
        }
    }
    Ok(targets)
}
