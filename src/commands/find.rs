//! Word finder command
//!
//! Searches either by letters or by a `?` wildcard pattern, then applies
//! length bounds and the requested ordering.

use super::anagram::WordListResult;
use crate::core::{InputError, MAX_RACK_LETTERS, validate_letters};
use crate::solver::{SortCriterion, WordFilter, find_by_pattern, find_matches, sort_words};
use crate::wordlists::Dictionary;

/// Default minimum word length for the word finder
pub const DEFAULT_FIND_MIN_LENGTH: usize = 3;

/// Default maximum word length for the word finder
pub const DEFAULT_FIND_MAX_LENGTH: usize = 15;

/// Configuration for the word finder
///
/// A non-blank `pattern` takes precedence over `letters`.
pub struct FindConfig {
    pub letters: Option<String>,
    pub pattern: Option<String>,
    pub min_length: usize,
    pub max_length: usize,
    pub sort: SortCriterion,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: Option<String>, pattern: Option<String>) -> Self {
        Self {
            letters,
            pattern,
            min_length: DEFAULT_FIND_MIN_LENGTH,
            max_length: DEFAULT_FIND_MAX_LENGTH,
            sort: SortCriterion::Length,
        }
    }
}

/// Run the word finder
///
/// # Errors
///
/// Returns an error if neither letters nor a pattern are given, or if the
/// chosen query is longer than [`MAX_RACK_LETTERS`].
pub fn find_words(
    config: &FindConfig,
    dictionary: &Dictionary,
) -> Result<WordListResult, InputError> {
    let pattern = non_blank(config.pattern.as_deref());
    let letters = non_blank(config.letters.as_deref());

    let (query, words) = match (pattern, letters) {
        (Some(pattern), _) => {
            let pattern = validate_letters(pattern, MAX_RACK_LETTERS)?;
            (pattern, find_by_pattern(pattern, dictionary))
        }
        (None, Some(letters)) => {
            let letters = validate_letters(letters, MAX_RACK_LETTERS)?;
            (letters, find_matches(letters, dictionary))
        }
        (None, None) => return Err(InputError::MissingQuery),
    };

    let filtered = WordFilter::new()
        .with_length(config.min_length, Some(config.max_length))
        .apply(words);
    let sorted = sort_words(&filtered, config.sort);

    Ok(WordListResult::new(query, &sorted))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
