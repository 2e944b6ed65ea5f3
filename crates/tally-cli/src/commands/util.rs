//! Shared utilities for CLI commands.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::TimeEntry;

/// Reads a JSON array of time entries from `path`, or from stdin when `None`.
pub fn read_entries(path: Option<&Path>) -> Result<Vec<TimeEntry>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse_entries(BufReader::new(file))
                .with_context(|| format!("failed to read entries from {}", path.display()))
        }
        None => parse_entries(io::stdin().lock()).context("failed to read entries from stdin"),
    }
}

/// Parses a JSON array of time entries.
pub fn parse_entries<R: Read>(reader: R) -> Result<Vec<TimeEntry>> {
    let entries: Vec<TimeEntry> =
        serde_json::from_reader(reader).context("expected a JSON array of time entries")?;
    tracing::debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}
