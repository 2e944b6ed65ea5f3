//! Errors raised by the duration engine.

use thiserror::Error;

/// Failures of duration arithmetic, duration parsing and timestamp rendering.
///
/// The `Display` text of every variant is stable: callers surface it verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// A start or end timestamp did not parse to an instant.
    #[error("Invalid date format")]
    InvalidDate,

    /// The end instant is not strictly after the start instant.
    #[error("End time must be after start time")]
    EndNotAfterStart,

    /// A duration string did not have two or three `:`-separated parts.
    #[error("Invalid duration format. Expected HH:MM or HH:MM:SS")]
    DurationPartCount { parts: usize },

    /// A duration part was not a non-negative integer.
    #[error("Invalid duration format. All parts must be numbers")]
    DurationNotNumeric,

    /// Minutes or seconds were 60 or more.
    #[error("Invalid duration format. Minutes and seconds must be less than 60")]
    DurationOutOfRange,

    /// A duration does not fit in `i64` milliseconds.
    #[error("Duration exceeds the supported range")]
    DurationOverflow,

    /// A timestamp passed for display did not parse.
    #[error("Invalid timestamp")]
    InvalidTimestamp,
}

/// Coarse classification of [`TimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be parsed.
    InvalidFormat,
    /// End is not after start.
    InvalidOrdering,
    /// Numeric component outside its allowed bounds.
    InvalidRange,
}

impl TimeError {
    /// Returns the taxonomy bucket this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate
            | Self::DurationPartCount { .. }
            | Self::DurationNotNumeric
            | Self::InvalidTimestamp => ErrorKind::InvalidFormat,
            Self::EndNotAfterStart => ErrorKind::InvalidOrdering,
            Self::DurationOutOfRange | Self::DurationOverflow => ErrorKind::InvalidRange,
        }
    }
}
