//! Scrabble-style letter scoring

use std::fmt;

/// Standard English Scrabble tile values for `a`..=`z`
pub const TILE_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Point value of a single character (case-insensitive, 0 for non-letters)
#[inline]
#[must_use]
pub fn letter_value(ch: char) -> u32 {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        TILE_VALUES[(lower as u8 - b'a') as usize]
    } else {
        0
    }
}

/// Score a word by summing its letter values
///
/// # Examples
/// ```
/// use anagram_solver::core::score_of;
///
/// assert_eq!(score_of("quiz"), 22);
/// assert_eq!(score_of("QUIZ"), 22);
/// assert_eq!(score_of("a-1"), 1);
/// ```
#[must_use]
pub fn score_of(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

/// Total score of a multi-word combination
#[must_use]
pub fn combination_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| score_of(w.as_ref())).sum()
}

/// A word paired with its score, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let score = score_of(&word);
        Self { word, score }
    }

    /// Number of letters in the word
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pts)", self.word, self.score)
    }
}
