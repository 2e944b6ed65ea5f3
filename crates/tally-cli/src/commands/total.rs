//! Total command for summing tracked time.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::{TimeEntry, TrackedDuration, calculate_total_time, is_active_entry};

#[derive(Debug, Serialize)]
struct TotalReport<'a> {
    total: &'a TrackedDuration,
    entries: usize,
    active: usize,
}

/// Sums closed entries and counts the running ones.
pub fn run<W: Write>(writer: &mut W, entries: &[TimeEntry], json: bool) -> Result<()> {
    let total = calculate_total_time(entries).context("failed to total entries")?;
    let active = entries.iter().filter(|entry| is_active_entry(*entry)).count();

    if json {
        let report = TotalReport {
            total: &total,
            entries: entries.len(),
            active,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(writer, "Total:   {total}")?;
    writeln!(writer, "Entries: {} ({active} active)", entries.len())?;
    Ok(())
}
