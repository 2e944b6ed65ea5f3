//! Time entry records.

use serde::{Deserialize, Serialize};

use crate::timestamp::TimeValue;

/// A unit of tracked work as submitted by a client.
///
/// Every field is optional on the wire so that incomplete records can be
/// validated and reported on rather than rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeValue>,

    /// Absent while the entry is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeValue>,
}

impl TimeEntry {
    /// Creates a running entry.
    pub fn started(description: impl Into<String>, start: impl Into<TimeValue>) -> Self {
        Self {
            description: Some(description.into()),
            start_time: Some(start.into()),
            end_time: None,
        }
    }

    /// Creates a closed entry.
    pub fn closed(
        description: impl Into<String>,
        start: impl Into<TimeValue>,
        end: impl Into<TimeValue>,
    ) -> Self {
        Self {
            end_time: Some(end.into()),
            ..Self::started(description, start)
        }
    }
}

/// A record carrying start and end timestamps.
///
/// This trait lets aggregation run over caller-owned record types as well as
/// [`TimeEntry`].
pub trait TimedEntry {
    /// The start timestamp, if set.
    fn start_time(&self) -> Option<&TimeValue>;

    /// The end timestamp, if set. Empty text is treated as unset by callers.
    fn end_time(&self) -> Option<&TimeValue>;
}

impl TimedEntry for TimeEntry {
    fn start_time(&self) -> Option<&TimeValue> {
        self.start_time.as_ref()
    }

    fn end_time(&self) -> Option<&TimeValue> {
        self.end_time.as_ref()
    }
}

impl<T: TimedEntry + ?Sized> TimedEntry for &T {
    fn start_time(&self) -> Option<&TimeValue> {
        (**self).start_time()
    }

    fn end_time(&self) -> Option<&TimeValue> {
        (**self).end_time()
    }
}
