//! Wall-clock access.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Current instant as ISO-8601 UTC with millisecond precision,
/// e.g. `2023-01-15T14:30:45.123Z`.
pub fn current_timestamp(clock: &impl Clock) -> String {
    clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// [`current_timestamp`] against the system clock.
pub fn get_current_timestamp() -> String {
    current_timestamp(&SystemClock)
}
