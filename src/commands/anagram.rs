//! Anagram command
//!
//! Finds every word that can be built from a rack of letters.

use crate::core::{InputError, MAX_RACK_LETTERS, ScoredWord, validate_letters};
use crate::solver::{SortCriterion, find_matches, sort_words};
use crate::wordlists::Dictionary;

/// Configuration for an anagram search
pub struct AnagramConfig {
    pub letters: String,
    pub sort: SortCriterion,
}

impl AnagramConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            sort: SortCriterion::Length,
        }
    }
}

/// A query with its ordered, scored matches
pub struct WordListResult {
    pub query: String,
    pub words: Vec<ScoredWord>,
}

impl WordListResult {
    pub(crate) fn new(query: impl Into<String>, words: &[String]) -> Self {
        Self {
            query: query.into(),
            words: words.iter().map(ScoredWord::new).collect(),
        }
    }

    /// Highest score among the matches, 0 when there are none
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.words.iter().map(|w| w.score).max().unwrap_or(0)
    }
}

/// Find and sort every word spellable from the configured letters
///
/// # Errors
///
/// Returns an error if the letters are blank or longer than
/// [`MAX_RACK_LETTERS`].
pub fn solve_anagram(
    config: &AnagramConfig,
    dictionary: &Dictionary,
) -> Result<WordListResult, InputError> {
    let letters = validate_letters(&config.letters, MAX_RACK_LETTERS)?;

    let matches = find_matches(letters, dictionary);
    let sorted = sort_words(&matches, config.sort);

    Ok(WordListResult::new(letters, &sorted))
}
