//! Timestamp inputs and their display forms.
//!
//! Timestamps arrive either as native `chrono` values or as text. Text is
//! kept as given so that an unparseable value can still be reported by the
//! validator instead of being rejected at deserialization time.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Offset-bearing layouts RFC 3339 misses: minute precision and `+HHMM`.
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Naive date-time layouts accepted after the offset forms, interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A timestamp as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// An already-resolved instant.
    Instant(DateTime<Utc>),
    /// Unparsed text, expected to hold an ISO-8601 timestamp.
    Text(String),
}

impl TimeValue {
    /// Whether the value counts as set. Empty text does not.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Instant(_) => true,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Anything that can be resolved to a UTC instant.
pub trait ToInstant {
    /// Returns the instant, or `None` when the value is not a valid timestamp.
    fn to_instant(&self) -> Option<DateTime<Utc>>;
}

impl<Tz: TimeZone> ToInstant for DateTime<Tz> {
    fn to_instant(&self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl ToInstant for str {
    fn to_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl ToInstant for String {
    fn to_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl ToInstant for TimeValue {
    fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(instant) => Some(*instant),
            Self::Text(text) => parse_instant(text),
        }
    }
}

impl<T: ToInstant + ?Sized> ToInstant for &T {
    fn to_instant(&self) -> Option<DateTime<Utc>> {
        (**self).to_instant()
    }
}

/// Parses ISO-8601 text into a UTC instant.
///
/// Accepts RFC 3339 with an offset, an offset date-time with minute
/// precision or a basic `+HHMM` offset, a naive date-time (taken as UTC), or
/// a bare date (midnight UTC).
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(text, layout) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Which parts of a timestamp to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// `01/15/2023`
    Date,
    /// `02:30:45 PM`
    Time,
    /// `01/15/2023, 02:30:45 PM`
    #[default]
    Datetime,
}

impl TimestampFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%m/%d/%Y",
            Self::Time => "%I:%M:%S %p",
            Self::Datetime => "%m/%d/%Y, %I:%M:%S %p",
        }
    }

    /// String form used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimestampFormat {
    type Err = Infallible;

    /// Unknown selectors fall back to [`TimestampFormat::Datetime`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "date" => Self::Date,
            "time" => Self::Time,
            _ => Self::Datetime,
        })
    }
}

/// Renders a timestamp for display in UTC with a US month/day/year layout
/// and a 12-hour clock.
pub fn format_timestamp(
    timestamp: &(impl ToInstant + ?Sized),
    format: TimestampFormat,
) -> Result<String, TimeError> {
    let instant = timestamp
        .to_instant()
        .ok_or(TimeError::InvalidTimestamp)?;
    Ok(instant.format(format.pattern()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::duration::calculate_duration;

    const SAMPLE: &str = "2023-01-15T14:30:45Z";

    fn utc(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_parses_rfc3339_with_offset() {
        assert_eq!(
            parse_instant("2023-01-01T11:00:00+02:00"),
            Some(utc("2023-01-01T09:00:00Z"))
        );
    }

    #[test]
    fn test_parses_minute_precision_with_offset() {
        let expected = Some(utc("2023-01-01T09:00:00Z"));
        assert_eq!(parse_instant("2023-01-01T09:00Z"), expected);
        assert_eq!(parse_instant("2023-01-01T11:00+02:00"), expected);
        assert_eq!(parse_instant("2023-01-01T11:00+0200"), expected);
    }

    #[test]
    fn test_parses_basic_offset_with_seconds() {
        assert_eq!(
            parse_instant("2023-01-01T11:00:00+0200"),
            Some(utc("2023-01-01T09:00:00Z"))
        );
        assert_eq!(
            parse_instant("2023-01-01T11:00:00.500+0200"),
            Some(utc("2023-01-01T09:00:00.500Z"))
        );
    }

    #[test]
    fn test_offset_forms_measure_like_rfc3339() {
        let minutes = calculate_duration("2023-01-01T09:00Z", "2023-01-01T10:00Z").unwrap();
        assert_eq!(minutes.milliseconds, 3_600_000);

        let basic =
            calculate_duration("2023-01-01T09:00:00+0200", "2023-01-01T10:00:00+0200").unwrap();
        assert_eq!(basic.formatted, "01:00:00");
    }

    #[test]
    fn test_parses_naive_forms_as_utc() {
        assert_eq!(
            parse_instant("2023-01-01T09:00:00"),
            Some(utc("2023-01-01T09:00:00Z"))
        );
        assert_eq!(
            parse_instant("2023-01-01T09:00:00.250"),
            Some(utc("2023-01-01T09:00:00.250Z"))
        );
        assert_eq!(
            parse_instant("2023-01-01T09:00"),
            Some(utc("2023-01-01T09:00:00Z"))
        );
        assert_eq!(
            parse_instant("2023-01-01"),
            Some(utc("2023-01-01T00:00:00Z"))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_instant("invalid-date"), None);
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("   "), None);
        assert_eq!(parse_instant("2023-13-01T00:00:00Z"), None);
    }

    #[test]
    fn test_empty_text_is_not_present() {
        assert!(!TimeValue::from("").is_present());
        assert!(TimeValue::from("garbage").is_present());
        assert!(TimeValue::from(Utc::now()).is_present());
    }

    #[test]
    fn test_deserializes_invalid_text_without_failing() {
        let value: TimeValue = serde_json::from_str("\"not a date\"").unwrap();
        assert_eq!(value, TimeValue::Text("not a date".to_string()));
        assert_eq!(value.to_instant(), None);

        let value: TimeValue = serde_json::from_str("\"2023-01-01T09:00:00Z\"").unwrap();
        assert_eq!(value.to_instant(), Some(utc("2023-01-01T09:00:00Z")));
    }

    #[test]
    fn test_formats_datetime_by_default() {
        let formatted = format_timestamp(SAMPLE, TimestampFormat::default()).unwrap();
        assert_eq!(formatted, "01/15/2023, 02:30:45 PM");
    }

    #[test]
    fn test_formats_date_only() {
        let formatted = format_timestamp(SAMPLE, TimestampFormat::Date).unwrap();
        assert_eq!(formatted, "01/15/2023");
        assert!(!formatted.contains(':'));
    }

    #[test]
    fn test_formats_time_only() {
        let formatted = format_timestamp(SAMPLE, TimestampFormat::Time).unwrap();
        assert_eq!(formatted, "02:30:45 PM");
        assert!(!formatted.contains('/'));
    }

    #[test]
    fn test_formats_native_values() {
        let formatted = format_timestamp(&utc(SAMPLE), TimestampFormat::Date).unwrap();
        assert_eq!(formatted, "01/15/2023");
    }

    #[test]
    fn test_morning_hours_render_am() {
        let formatted =
            format_timestamp("2023-01-15T00:05:00Z", TimestampFormat::Time).unwrap();
        assert_eq!(formatted, "12:05:00 AM");
    }

    #[test]
    fn test_invalid_timestamp_errors() {
        let err = format_timestamp("invalid-date", TimestampFormat::Datetime).unwrap_err();
        assert_eq!(err, TimeError::InvalidTimestamp);
        assert_eq!(err.to_string(), "Invalid timestamp");
    }

    #[test]
    fn test_format_selector_falls_back_to_datetime() {
        assert_eq!("date".parse::<TimestampFormat>(), Ok(TimestampFormat::Date));
        assert_eq!("time".parse::<TimestampFormat>(), Ok(TimestampFormat::Time));
        assert_eq!("datetime".parse::<TimestampFormat>(), Ok(TimestampFormat::Datetime));
        assert_eq!("weekday".parse::<TimestampFormat>(), Ok(TimestampFormat::Datetime));
    }
}
