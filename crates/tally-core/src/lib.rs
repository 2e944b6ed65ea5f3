//! Core domain logic for tally.
//!
//! This crate contains:
//! - Duration engine: measuring, formatting, parsing and summing durations
//! - Entry validation: checking time entries before they are stored
//! - Field validation: email, password and name checks for account data

mod clock;
mod duration;
mod entry;
mod error;
mod fields;
mod timestamp;
mod user;
mod validation;

pub use clock::{Clock, FixedClock, SystemClock, current_timestamp, get_current_timestamp};
pub use duration::{
    TrackedDuration, calculate_duration, calculate_total_time, format_duration,
    format_hours_minutes, is_active_entry, parse_duration,
};
pub use entry::{TimeEntry, TimedEntry};
pub use error::{ErrorKind, TimeError};
pub use fields::{
    is_strong_password, is_valid_email, sanitize_input, validate_email, validate_name,
    validate_password,
};
pub use timestamp::{TimeValue, TimestampFormat, ToInstant, format_timestamp, parse_instant};
pub use user::{UserData, validate_user_data};
pub use validation::{
    MAX_DESCRIPTION_CHARS, MAX_ENTRY_SPAN, PasswordStrength, Verdict, validate_time_entry,
};
