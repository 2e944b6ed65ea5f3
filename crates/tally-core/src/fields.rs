//! Validators for account fields and free-text input.
//!
//! A missing value yields only its "required" error. Otherwise every check
//! runs, as in [`validate_time_entry`](crate::validate_time_entry).

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{PasswordStrength, Verdict};

/// Local part, `@`, then at least two dot-separated DNS labels.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap()
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

const MAX_EMAIL_CHARS: usize = 254;
const MIN_PASSWORD_CHARS: usize = 6;
const RECOMMENDED_PASSWORD_CHARS: usize = 8;
const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 50;
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Whether `email` is well formed. No trimming or case folding is applied.
pub fn is_valid_email(email: &str) -> bool {
    let malformed_dots = email.contains("..") || email.starts_with('.') || email.ends_with('.');
    !malformed_dots && EMAIL_RE.is_match(email)
}

/// Validates an email address; the sanitized form is trimmed and lowercased.
pub fn validate_email(email: &str) -> Verdict {
    if email.is_empty() {
        return Verdict::from_errors(vec!["Email is required".to_string()]).with_sanitized("");
    }

    let sanitized = email.trim().to_lowercase();
    let mut errors = Vec::new();

    if !is_valid_email(&sanitized) {
        errors.push("Invalid email format".to_string());
    }
    if sanitized.chars().count() > MAX_EMAIL_CHARS {
        errors.push("Email is too long".to_string());
    }

    Verdict::from_errors(errors).with_sanitized(sanitized)
}

/// Character classes present in a password.
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
    special: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        Self {
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
        }
    }

    fn count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .into_iter()
            .filter(|present| *present)
            .count()
    }
}

/// Validates a password and classifies its strength.
///
/// A password of 6 or 7 characters gets the "should be at least 8" message,
/// and that message makes the verdict invalid like any other error.
pub fn validate_password(password: &str) -> Verdict {
    if password.is_empty() {
        return Verdict::from_errors(vec!["Password is required".to_string()])
            .with_strength(PasswordStrength::Weak);
    }

    let length = password.chars().count();
    let mut errors = Vec::new();

    if length < MIN_PASSWORD_CHARS {
        errors.push("Password must be at least 6 characters long".to_string());
    }
    // TODO: report this as a warning alongside the verdict once callers can show non-blocking hints.
    if (MIN_PASSWORD_CHARS..RECOMMENDED_PASSWORD_CHARS).contains(&length) {
        errors.push("Password should be at least 8 characters for better security".to_string());
    }

    let classes = CharClasses::of(password).count();
    let strength = if classes >= 4 && length >= RECOMMENDED_PASSWORD_CHARS {
        PasswordStrength::Strong
    } else if classes >= 3 && length >= MIN_PASSWORD_CHARS {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    };

    Verdict::from_errors(errors).with_strength(strength)
}

/// Whether a password has at least 8 characters and all four character classes.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= RECOMMENDED_PASSWORD_CHARS && CharClasses::of(password).count() == 4
}

/// Validates a person's name; the sanitized form is trimmed.
pub fn validate_name(name: &str) -> Verdict {
    if name.is_empty() {
        return Verdict::from_errors(vec!["Name is required".to_string()]).with_sanitized("");
    }

    let sanitized = name.trim();
    let length = sanitized.chars().count();
    let mut errors = Vec::new();

    if length < MIN_NAME_CHARS {
        errors.push("Name must be at least 2 characters long".to_string());
    }
    if length > MAX_NAME_CHARS {
        errors.push("Name must be less than 50 characters".to_string());
    }
    if !NAME_RE.is_match(sanitized) {
        errors.push("Name can only contain letters, spaces, hyphens, and apostrophes".to_string());
    }

    Verdict::from_errors(errors).with_sanitized(sanitized)
}

/// Escapes characters with special meaning in HTML.
///
/// Ampersands are left as they are.
pub fn sanitize_input(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
