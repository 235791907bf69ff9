//! Candidate validation for new users.
//!
//! A candidate is valid when:
//! - the username is not blank
//! - the email is present and has the `local@domain.tld` shape (no whitespace, a single
//!   `@`, and at least one dot after it)
//!
//! Mutation operations do not re-check this; callers validate before submitting.

use crate::model::NewUser;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates a candidate before it is handed to the add operation.
///
/// # Examples
/// ```
/// use rosterapp::model::NewUser;
/// use rosterapp::validation::validate_new_user;
///
/// assert!(validate_new_user(&NewUser::new("alice", "a@b.com")).is_ok());
/// assert!(validate_new_user(&NewUser::new("  ", "a@b.com")).is_err());
/// assert!(validate_new_user(&NewUser::new("alice", "a@b")).is_err());
/// ```
pub fn validate_new_user(candidate: &NewUser) -> Result<(), ValidationError> {
    if candidate.username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    validate_email(&candidate.email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        for email in ["a@b.com", "first.last@sub.example.org", "x+tag@y.io"] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plain",
            "@b.com",
            "a@.com",
            "a@b",
            "a@b.",
            "a b@c.com",
            "a@@b.com",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail(email.to_string())),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn blank_email_is_reported_as_missing() {
        assert_eq!(validate_email("   "), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn blank_username_is_rejected_first() {
        let candidate = NewUser::new("", "not-an-email");
        assert_eq!(
            validate_new_user(&candidate),
            Err(ValidationError::UsernameRequired)
        );
    }
}
