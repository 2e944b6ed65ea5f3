//! Timestamp display commands.

use std::io::Write;

use anyhow::{Context, Result};
use tally_core::{Clock, TimestampFormat, current_timestamp, format_timestamp};

/// Renders `timestamp` in the given layout.
pub fn run<W: Write>(writer: &mut W, timestamp: &str, format: TimestampFormat) -> Result<()> {
    let rendered = format_timestamp(timestamp, format)
        .with_context(|| format!("cannot display {timestamp:?}"))?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}

/// Prints the current instant.
pub fn now<W: Write>(writer: &mut W, clock: &impl Clock) -> Result<()> {
    writeln!(writer, "{}", current_timestamp(clock))?;
    Ok(())
}
