//! Scrabble helper command
//!
//! Finds playable words for a rack, optionally constrained to a prefix or
//! suffix already on the board, ordered by score.

use super::anagram::WordListResult;
use crate::core::{InputError, MAX_RACK_LETTERS, validate_letters};
use crate::solver::{SortCriterion, WordFilter, find_matches, sort_words};
use crate::wordlists::Dictionary;

/// Default minimum word length for Scrabble plays
pub const DEFAULT_SCRABBLE_MIN_LENGTH: usize = 3;

/// Configuration for a Scrabble search
pub struct ScrabbleConfig {
    pub tiles: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub min_length: usize,
}

impl ScrabbleConfig {
    #[must_use]
    pub const fn new(tiles: String) -> Self {
        Self {
            tiles,
            prefix: None,
            suffix: None,
            min_length: DEFAULT_SCRABBLE_MIN_LENGTH,
        }
    }
}

/// Find Scrabble plays sorted by score
///
/// Without tiles, the whole dictionary is searched, which only makes sense
/// together with a prefix or suffix.
///
/// # Errors
///
/// Returns an error if tiles, prefix and suffix are all blank, or if the
/// tiles exceed [`MAX_RACK_LETTERS`].
pub fn solve_scrabble(
    config: &ScrabbleConfig,
    dictionary: &Dictionary,
) -> Result<WordListResult, InputError> {
    let filter = WordFilter::new()
        .with_length(config.min_length, None)
        .with_prefix(config.prefix.as_deref())
        .with_suffix(config.suffix.as_deref());

    let candidates = if config.tiles.trim().is_empty() {
        if filter.prefix.is_none() && filter.suffix.is_none() {
            return Err(InputError::MissingQuery);
        }
        dictionary.words().to_vec()
    } else {
        let tiles = validate_letters(&config.tiles, MAX_RACK_LETTERS)?;
        find_matches(tiles, dictionary)
    };

    let words = filter.apply(candidates);
    let sorted = sort_words(&words, SortCriterion::Score);

    Ok(WordListResult::new(config.tiles.trim(), &sorted))
}
