//! Sign-up data checks.

use serde::{Deserialize, Serialize};

use crate::fields::is_valid_email;
use crate::validation::Verdict;

/// Account details submitted at registration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// Keeps the password out of logs.
impl std::fmt::Debug for UserData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Coarse registration check: one message per bad field, in field order.
pub fn validate_user_data(user: &UserData) -> Verdict {
    let mut errors = Vec::new();

    if user
        .name
        .as_deref()
        .is_none_or(|name| name.trim().chars().count() < 2)
    {
        errors.push("Name must be at least 2 characters long".to_string());
    }

    if !user.email.as_deref().is_some_and(is_valid_email) {
        errors.push("Valid email is required".to_string());
    }

    if user
        .password
        .as_deref()
        .is_none_or(|password| password.chars().count() < 6)
    {
        errors.push("Password must be at least 6 characters long".to_string());
    }

    Verdict::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, password: &str) -> UserData {
        UserData {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_accepts_complete_user() {
        let verdict = validate_user_data(&user("John Doe", "john@example.com", "password123"));

        assert!(verdict.is_valid());
        assert!(verdict.errors().is_empty());
    }

    #[test]
    fn test_reports_each_bad_field() {
        let verdict = validate_user_data(&user("J", "invalid-email", "123"));

        assert_eq!(
            verdict.errors(),
            [
                "Name must be at least 2 characters long",
                "Valid email is required",
                "Password must be at least 6 characters long",
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let verdict = validate_user_data(&UserData::default());

        assert!(!verdict.is_valid());
        assert_eq!(verdict.errors().len(), 3);
    }

    #[test]
    fn test_name_is_measured_after_trimming() {
        let verdict = validate_user_data(&user("  J  ", "john@example.com", "password123"));
        assert_eq!(verdict.errors(), ["Name must be at least 2 characters long"]);
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", user("John Doe", "john@example.com", "hunter22"));
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
