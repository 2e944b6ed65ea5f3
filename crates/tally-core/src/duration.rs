//! Duration arithmetic.
//!
//! All arithmetic runs on integer milliseconds. The `HH:MM:SS` text form is
//! derived from the (hours, minutes, seconds) decomposition, where hours never
//! roll over into days.

use std::fmt;

use serde::Serialize;

use crate::entry::TimedEntry;
use crate::error::TimeError;
use crate::timestamp::{TimeValue, ToInstant};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A measured span of time with its derived views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedDuration {
    /// Exact span in milliseconds.
    pub milliseconds: i64,
    /// `milliseconds` expressed in hours. Informational only.
    pub total_hours: f64,
    pub hours: i64,
    /// Always in `0..60`.
    pub minutes: i64,
    /// Always in `0..60`; sub-second remainders are truncated.
    pub seconds: i64,
    /// `HH:MM:SS` rendering of the decomposition.
    pub formatted: String,
}

impl TrackedDuration {
    /// Decomposes a millisecond count.
    #[must_use]
    pub fn from_millis(milliseconds: i64) -> Self {
        let hours = milliseconds / MS_PER_HOUR;
        let minutes = (milliseconds % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (milliseconds % MS_PER_MINUTE) / MS_PER_SECOND;

        #[expect(
            clippy::cast_precision_loss,
            reason = "total_hours is a display convenience, never compared"
        )]
        let total_hours = milliseconds as f64 / MS_PER_HOUR as f64;

        Self {
            milliseconds,
            total_hours,
            hours,
            minutes,
            seconds,
            formatted: format_duration(hours, minutes, seconds),
        }
    }

    /// The empty duration, `00:00:00`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_millis(0)
    }
}

impl fmt::Display for TrackedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Measures the span from `start` to `end`.
///
/// Fails with [`TimeError::InvalidDate`] when either side does not parse and
/// with [`TimeError::EndNotAfterStart`] when `end <= start`; equal instants
/// never yield a zero duration.
pub fn calculate_duration(
    start: &(impl ToInstant + ?Sized),
    end: &(impl ToInstant + ?Sized),
) -> Result<TrackedDuration, TimeError> {
    let (Some(start), Some(end)) = (start.to_instant(), end.to_instant()) else {
        return Err(TimeError::InvalidDate);
    };

    if end <= start {
        return Err(TimeError::EndNotAfterStart);
    }

    Ok(TrackedDuration::from_millis((end - start).num_milliseconds()))
}

/// Renders `HH:MM:SS`, padding each field to two digits.
///
/// Hours are never truncated, so 123 hours renders as `123:45:30`. No range
/// checks are applied.
pub fn format_duration(hours: i64, minutes: i64, seconds: i64) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// [`format_duration`] with seconds fixed at zero.
pub fn format_hours_minutes(hours: i64, minutes: i64) -> String {
    format_duration(hours, minutes, 0)
}

/// Parses `H:M` or `H:M:S` into milliseconds.
///
/// Hours are unbounded; minutes and seconds must be below 60. A total that
/// does not fit in `i64` milliseconds is [`TimeError::DurationOverflow`].
pub fn parse_duration(text: &str) -> Result<i64, TimeError> {
    let parts: Vec<&str> = text.split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [hours, minutes] => (parse_part(hours)?, parse_part(minutes)?, 0),
        [hours, minutes, seconds] => (
            parse_part(hours)?,
            parse_part(minutes)?,
            parse_part(seconds)?,
        ),
        _ => {
            return Err(TimeError::DurationPartCount { parts: parts.len() });
        }
    };

    if minutes >= 60 || seconds >= 60 {
        return Err(TimeError::DurationOutOfRange);
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| ms.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND))
        .ok_or(TimeError::DurationOverflow)
}

fn parse_part(part: &str) -> Result<i64, TimeError> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::DurationNotNumeric);
    }
    // Only digits remain, so the sole failure left is overflow.
    part.parse().map_err(|_| TimeError::DurationOverflow)
}

/// Sums the spans of all closed entries.
///
/// Entries missing a start or an end are skipped; they are running or
/// incomplete, which is a normal state. A closed entry whose timestamps do
/// not parse or are inverted fails the whole sum, as does a sum that leaves
/// the `i64` millisecond range.
pub fn calculate_total_time<E: TimedEntry>(
    entries: impl IntoIterator<Item = E>,
) -> Result<TrackedDuration, TimeError> {
    let mut total_ms = 0_i64;
    let mut skipped = 0_usize;

    for entry in entries {
        let (Some(start), Some(end)) = (present(entry.start_time()), present(entry.end_time()))
        else {
            skipped += 1;
            continue;
        };
        let span = calculate_duration(start, end)?.milliseconds;
        total_ms = total_ms
            .checked_add(span)
            .ok_or(TimeError::DurationOverflow)?;
    }

    if skipped > 0 {
        tracing::debug!(skipped, "ignored entries without both start and end");
    }

    Ok(TrackedDuration::from_millis(total_ms))
}

/// Whether the entry is running: started, not yet ended.
pub fn is_active_entry(entry: &impl TimedEntry) -> bool {
    present(entry.start_time()).is_some() && present(entry.end_time()).is_none()
}

fn present(value: Option<&TimeValue>) -> Option<&TimeValue> {
    value.filter(|value| value.is_present())
}
