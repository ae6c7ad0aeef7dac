//! Host-level input validation
//!
//! The matching engine accepts any input. These limits belong to the
//! application in front of it and are enforced before the engine is called.

use std::fmt;

/// Maximum length of a letter rack for single-word searches
pub const MAX_RACK_LETTERS: usize = 20;

/// Maximum length of a phrase for multi-word searches
pub const MAX_PHRASE_LETTERS: usize = 30;

/// Largest word budget offered for multi-word searches
pub const MAX_WORD_BUDGET: usize = 3;

/// Error type for rejected user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooLong { len: usize, max: usize },
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    MissingQuery,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter at least one letter"),
            Self::TooLong { len, max } => {
                write!(f, "Maximum {max} letters allowed, got {len}")
            }
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} must be between {min} and {max}, got {value}"),
            Self::MissingQuery => {
                write!(f, "Provide letters, a pattern, a prefix or a suffix")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Validate a user-entered string against a length limit
///
/// Returns the trimmed input.
///
/// # Errors
///
/// Returns `InputError::Empty` for blank input and `InputError::TooLong`
/// when the trimmed input has more than `max` characters.
///
/// # Examples
/// ```
/// use anagram_solver::core::{InputError, validate_letters, MAX_RACK_LETTERS};
///
/// assert_eq!(validate_letters("  games ", MAX_RACK_LETTERS), Ok("games"));
/// assert_eq!(validate_letters("   ", MAX_RACK_LETTERS), Err(InputError::Empty));
/// ```
pub fn validate_letters(input: &str, max: usize) -> Result<&str, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let len = trimmed.chars().count();
    if len > max {
        return Err(InputError::TooLong { len, max });
    }

    Ok(trimmed)
}

/// Validate a numeric option against an inclusive range
///
/// # Errors
///
/// Returns `InputError::OutOfRange` when `value` is outside `min..=max`.
pub fn validate_range(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<usize, InputError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_input_within_limit() {
        assert_eq!(validate_letters("listen", MAX_RACK_LETTERS), Ok("listen"));
        let twenty = "a".repeat(MAX_RACK_LETTERS);
        assert_eq!(
            validate_letters(&twenty, MAX_RACK_LETTERS),
            Ok(twenty.as_str())
        );
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_letters("", MAX_RACK_LETTERS), Err(InputError::Empty));
        assert_eq!(
            validate_letters(" \t\n", MAX_RACK_LETTERS),
            Err(InputError::Empty)
        );
    }

    #[test]
    fn rejects_long_input() {
        let long = "a".repeat(MAX_RACK_LETTERS + 1);
        assert_eq!(
            validate_letters(&long, MAX_RACK_LETTERS),
            Err(InputError::TooLong { len: 21, max: 20 })
        );
    }

    #[test]
    fn phrase_limit_counts_inner_spaces() {
        let phrase = "listen silent listen silent ab";
        assert_eq!(phrase.len(), 30);
        assert!(validate_letters(phrase, MAX_PHRASE_LETTERS).is_ok());
        assert!(validate_letters(&format!("{phrase}c"), MAX_PHRASE_LETTERS).is_err());
    }

    #[test]
    fn range_validation() {
        assert_eq!(validate_range("max words", 2, 1, MAX_WORD_BUDGET), Ok(2));
        assert!(matches!(
            validate_range("max words", 0, 1, MAX_WORD_BUDGET),
            Err(InputError::OutOfRange { value: 0, .. })
        ));
        assert!(validate_range("max words", 4, 1, MAX_WORD_BUDGET).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InputError::TooLong { len: 21, max: 20 }.to_string(),
            "Maximum 20 letters allowed, got 21"
        );
        assert_eq!(
            InputError::OutOfRange {
                name: "max words",
                value: 9,
                min: 1,
                max: 3
            }
            .to_string(),
            "max words must be between 1 and 3, got 9"
        );
    }
}
