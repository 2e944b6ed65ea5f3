//! Validate command for checking time entries.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tally_core::{TimeEntry, Verdict, validate_time_entry};

#[derive(Debug, Serialize)]
struct EntryVerdict {
    index: usize,
    #[serde(flatten)]
    verdict: Verdict,
}

/// Validates every entry and reports each verdict.
///
/// Returns the number of invalid entries.
pub fn run<W: Write>(writer: &mut W, entries: &[TimeEntry], json: bool) -> Result<usize> {
    let verdicts: Vec<EntryVerdict> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| EntryVerdict {
            index,
            verdict: validate_time_entry(entry),
        })
        .collect();
    let invalid = verdicts.iter().filter(|v| !v.verdict.is_valid()).count();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&verdicts)?)?;
        return Ok(invalid);
    }

    for EntryVerdict { index, verdict } in &verdicts {
        if verdict.is_valid() {
            writeln!(writer, "#{index}: ok")?;
            continue;
        }
        writeln!(writer, "#{index}: invalid")?;
        for error in verdict.errors() {
            writeln!(writer, "  - {error}")?;
        }
    }

    Ok(invalid)
}
