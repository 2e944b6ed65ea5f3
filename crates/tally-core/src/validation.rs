//! Validation verdicts and the time entry validator.
//!
//! Validators never fail. Every applicable check runs and appends its message,
//! so a single call reports all problems in a fixed order.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::entry::TimeEntry;
use crate::timestamp::{TimeValue, ToInstant};

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Longest span a single entry may cover.
pub const MAX_ENTRY_SPAN: TimeDelta = TimeDelta::hours(24);

/// Password strength classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a validation call.
///
/// `is_valid` always equals `errors.is_empty()`; the fields are private so the
/// two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    is_valid: bool,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sanitized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strength: Option<PasswordStrength>,
}

impl Verdict {
    /// Builds a verdict from collected error messages.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            sanitized: None,
            strength: None,
        }
    }

    /// Attaches the cleaned-up form of the validated input.
    #[must_use]
    pub fn with_sanitized(mut self, sanitized: impl Into<String>) -> Self {
        self.sanitized = Some(sanitized.into());
        self
    }

    /// Attaches a password strength classification.
    #[must_use]
    pub const fn with_strength(mut self, strength: PasswordStrength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Error messages in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn sanitized(&self) -> Option<&str> {
        self.sanitized.as_deref()
    }

    pub const fn strength(&self) -> Option<PasswordStrength> {
        self.strength
    }

    /// Whether `message` is among the reported errors.
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}

/// Checks a single time entry.
///
/// An entry with a start and no end is valid; a running entry is not an error.
pub fn validate_time_entry(entry: &TimeEntry) -> Verdict {
    let mut errors = Vec::new();

    let description = entry.description.as_deref();
    if description.is_none_or(|d| d.trim().is_empty()) {
        errors.push("Description is required".to_string());
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_CHARS) {
        errors.push("Description must be less than 500 characters".to_string());
    }

    let start = present(entry.start_time.as_ref());
    let end = present(entry.end_time.as_ref());
    let start_instant = start.and_then(|value| value.to_instant());
    let end_instant = end.and_then(|value| value.to_instant());

    if start_instant.is_none() {
        errors.push("Valid start time is required".to_string());
    }
    if end.is_some() && end_instant.is_none() {
        errors.push("Valid end time is required".to_string());
    }

    // Unparseable bounds were reported above; there is nothing to compare.
    if let (Some(start), Some(end)) = (start_instant, end_instant) {
        if end <= start {
            errors.push("End time must be after start time".to_string());
        }
        if end - start > MAX_ENTRY_SPAN {
            errors.push("Time entry cannot exceed 24 hours".to_string());
        }
    }

    if !errors.is_empty() {
        tracing::debug!(?errors, "time entry rejected");
    }

    Verdict::from_errors(errors)
}

fn present(value: Option<&TimeValue>) -> Option<&TimeValue> {
    value.filter(|value| value.is_present())
}
