//! Core domain types for word matching
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to copy or clone.

mod input;
mod letters;
mod pattern;
mod score;
mod tiles;

pub use input::{
    InputError, MAX_PHRASE_LETTERS, MAX_RACK_LETTERS, MAX_WORD_BUDGET, validate_letters,
    validate_range,
};
pub use letters::{ALPHABET_SIZE, LetterCounts};
pub use pattern::{Slot, WILDCARD, WildcardPattern};
pub use score::{ScoredWord, TILE_VALUES, combination_score, letter_value, score_of};
pub use tiles::{RACK_SIZE, TILE_DISTRIBUTION, TileBag};
