//! Random rack command
//!
//! Draws a rack from a standard tile bag and lists the plays it allows.

use super::anagram::WordListResult;
use crate::core::TileBag;
use crate::solver::{SortCriterion, WordFilter, find_matches, sort_words};
use crate::wordlists::Dictionary;
use rand::Rng;

/// Minimum length of words listed for a random rack
pub const RACK_MIN_WORD_LENGTH: usize = 2;

/// Draw a rack and find every word it can play, highest score first
pub fn draw_and_solve<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    dictionary: &Dictionary,
) -> WordListResult {
    let rack = TileBag::standard().draw_rack(rng, size);
    let words = WordFilter::new()
        .with_length(RACK_MIN_WORD_LENGTH, None)
        .apply(find_matches(&rack, dictionary));
    let sorted = sort_words(&words, SortCriterion::Score);

    WordListResult::new(rack, &sorted)
}
