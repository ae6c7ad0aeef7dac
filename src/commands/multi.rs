//! Multi-word anagram command
//!
//! Splits a phrase into combinations of dictionary words that use every
//! letter exactly once, best total score first.

use crate::core::{
    InputError, MAX_PHRASE_LETTERS, MAX_WORD_BUDGET, combination_score, validate_letters,
    validate_range,
};
use crate::solver::{
    DecomposeOptions, SearchStats, WordCombination, decompose_with_stats, sort_combinations,
};
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// Default number of words per combination
pub const DEFAULT_MAX_WORDS: usize = 2;

/// Configuration for a multi-word search
pub struct MultiConfig {
    pub phrase: String,
    pub max_words: usize,
    pub options: DecomposeOptions,
}

impl MultiConfig {
    #[must_use]
    pub fn new(phrase: String) -> Self {
        Self {
            phrase,
            max_words: DEFAULT_MAX_WORDS,
            options: DecomposeOptions::default(),
        }
    }
}

/// A combination with its total score
pub struct ScoredCombination {
    pub words: WordCombination,
    pub total_score: u32,
}

/// Result of a multi-word search
pub struct MultiResult {
    pub phrase: String,
    pub combinations: Vec<ScoredCombination>,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Decompose the configured phrase and order the combinations by score
///
/// # Errors
///
/// Returns an error if the phrase is blank or longer than
/// [`MAX_PHRASE_LETTERS`], or if `max_words` is outside
/// `1..=MAX_WORD_BUDGET`.
pub fn solve_multi(
    config: &MultiConfig,
    dictionary: &Dictionary,
) -> Result<MultiResult, InputError> {
    let phrase = validate_letters(&config.phrase, MAX_PHRASE_LETTERS)?;
    let max_words = validate_range("max words", config.max_words, 1, MAX_WORD_BUDGET)?;

    let start = Instant::now();
    let decomposition = decompose_with_stats(phrase, dictionary, max_words, config.options);
    let duration = start.elapsed();

    let combinations = sort_combinations(decomposition.combinations)
        .into_iter()
        .map(|words| ScoredCombination {
            total_score: combination_score(&words),
            words,
        })
        .collect();

    Ok(MultiResult {
        phrase: phrase.to_string(),
        combinations,
        stats: decomposition.stats,
        duration,
    })
}
