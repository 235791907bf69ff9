//! # Selecting Users From Text
//!
//! Ids are the canonical handle for a user, but they are long and awkward to type.
//! Listings therefore number every row with its **position** in the unfiltered,
//! unsorted collection (newest user = 1). Searching or sorting a listing never changes
//! the number shown next to a user, so `roster delete 2` targets the same record no
//! matter how the list was displayed.
//!
//! Ids are opaque, and nothing stops an id or a username from being all digits. Text
//! is therefore matched against ids first, then usernames, and only digits that match
//! neither are taken as a row number.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSelector {
    /// All digits: an exact id or username, otherwise a 1-based row number.
    Number(String),
    /// An exact id or username.
    Key(String),
}

impl UserSelector {
    /// The text to match against ids and usernames.
    pub fn key(&self) -> &str {
        match self {
            UserSelector::Number(text) | UserSelector::Key(text) => text,
        }
    }

    /// The row number this selector falls back to. `0` and values that overflow are
    /// not row numbers.
    pub fn position(&self) -> Option<usize> {
        match self {
            UserSelector::Number(text) => text.parse().ok().filter(|n| *n > 0),
            UserSelector::Key(_) => None,
        }
    }
}

impl FromStr for UserSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(UserSelector::Number(trimmed.to_string()));
        }
        Ok(UserSelector::Key(trimmed.to_string()))
    }
}

impl fmt::Display for UserSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty user selector")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_numbers() {
        assert_eq!("3".parse(), Ok(UserSelector::Number("3".to_string())));
        assert_eq!(" 12 ".parse(), Ok(UserSelector::Number("12".to_string())));
    }

    #[test]
    fn numbers_fall_back_to_positions() {
        let twelve: UserSelector = "12".parse().unwrap();
        assert_eq!(twelve.position(), Some(12));
        assert_eq!(twelve.key(), "12");

        let zero: UserSelector = "0".parse().unwrap();
        assert_eq!(zero.position(), None);

        let huge: UserSelector = "99999999999999999999999".parse().unwrap();
        assert_eq!(huge.position(), None);
    }

    #[test]
    fn other_text_is_a_key() {
        assert_eq!("alice".parse(), Ok(UserSelector::Key("alice".to_string())));
        let key: UserSelector = "2b7c-41".parse().unwrap();
        assert_eq!(key, UserSelector::Key("2b7c-41".to_string()));
        assert_eq!(key.position(), None);
    }

    #[test]
    fn blank_is_rejected() {
        assert_eq!("  ".parse::<UserSelector>(), Err(SelectorError::Empty));
    }
}
