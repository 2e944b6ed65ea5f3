//! Duration commands: measure, parse and format.

use std::io::Write;

use anyhow::{Context, Result};
use tally_core::{calculate_duration, format_duration, parse_duration};

/// Measures the span between two timestamps.
pub fn run<W: Write>(writer: &mut W, start: &str, end: &str, json: bool) -> Result<()> {
    let duration = calculate_duration(start, end)
        .with_context(|| format!("cannot measure {start} to {end}"))?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&duration)?)?;
    } else {
        writeln!(
            writer,
            "{} ({} ms, {:.4} h)",
            duration, duration.milliseconds, duration.total_hours
        )?;
    }

    Ok(())
}

/// Prints the millisecond value of an `H:M[:S]` duration.
pub fn parse<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let ms = parse_duration(text).with_context(|| format!("cannot parse duration {text:?}"))?;
    writeln!(writer, "{ms}")?;
    Ok(())
}

/// Prints `HH:MM:SS`.
pub fn format<W: Write>(writer: &mut W, hours: i64, minutes: i64, seconds: i64) -> Result<()> {
    writeln!(writer, "{}", format_duration(hours, minutes, seconds))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_measures_text_output() {
        let out = output(|w| run(w, "2023-01-01T09:00:00Z", "2023-01-01T17:30:45Z", false));
        assert_snapshot!(out, @"08:30:45 (30645000 ms, 8.5125 h)");
    }

    #[test]
    fn test_measures_json_output() {
        let out = output(|w| run(w, "2023-01-01T10:00:00Z", "2023-01-01T12:00:00Z", true));
        assert_snapshot!(out, @r#"
        {
          "milliseconds": 7200000,
          "totalHours": 2.0,
          "hours": 2,
          "minutes": 0,
          "seconds": 0,
          "formatted": "02:00:00"
        }
        "#);
    }

    #[test]
    fn test_reversed_range_reports_engine_message() {
        let mut buf = Vec::new();
        let err = run(&mut buf, "2023-01-01T17:00:00Z", "2023-01-01T09:00:00Z", false).unwrap_err();

        assert_eq!(err.root_cause().to_string(), "End time must be after start time");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_parses_to_milliseconds() {
        assert_eq!(output(|w| parse(w, "02:30:45")), "9045000\n");
    }

    #[test]
    fn test_parse_failure_keeps_range_message() {
        let err = parse(&mut Vec::new(), "01:60:00").unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Invalid duration format. Minutes and seconds must be less than 60"
        );
    }

    #[test]
    fn test_formats_large_hours() {
        assert_eq!(output(|w| format(w, 123, 45, 30)), "123:45:30\n");
    }
}
