//! Result ordering
//!
//! Sorting never mutates the caller's list; a new vector is returned. All
//! sorts are stable, so ties keep their input order.

use crate::core::{combination_score, score_of};
use std::cmp::Reverse;
use std::fmt;

/// How to order a word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// Longest words first
    #[default]
    Length,
    /// Ascending lexicographic order
    Alphabetical,
    /// Highest Scrabble score first
    Score,
    /// Leave the list as it is
    Unsorted,
}

impl SortCriterion {
    /// Create a criterion from its name
    ///
    /// Supported names: "length", "alphabetical" (or "alpha"), "score".
    /// Unrecognized names yield `Unsorted`, which passes lists through unchanged.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "length" | "len" => Self::Length,
            "alphabetical" | "alpha" => Self::Alphabetical,
            "score" => Self::Score,
            _ => Self::Unsorted,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Alphabetical => "alphabetical",
            Self::Score => "score",
            Self::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Return a sorted copy of `words`
///
/// # Examples
/// ```
/// use anagram_solver::solver::{SortCriterion, sort_words};
///
/// let words = ["a", "bb", "ccc"].map(String::from);
/// assert_eq!(sort_words(&words, SortCriterion::Length), ["ccc", "bb", "a"]);
///
/// let words = ["b", "a", "c"].map(String::from);
/// assert_eq!(sort_words(&words, SortCriterion::Alphabetical), ["a", "b", "c"]);
/// ```
#[must_use]
pub fn sort_words<S: AsRef<str> + Clone>(words: &[S], criterion: SortCriterion) -> Vec<S> {
    let mut sorted = words.to_vec();
    match criterion {
        SortCriterion::Length => sorted.sort_by_key(|w| Reverse(w.as_ref().chars().count())),
        SortCriterion::Alphabetical => sorted.sort_by(|a, b| a.as_ref().cmp(b.as_ref())),
        SortCriterion::Score => sorted.sort_by_key(|w| Reverse(score_of(w.as_ref()))),
        SortCriterion::Unsorted => {}
    }
    sorted
}

/// Order multi-word combinations for display
///
/// Highest total score first; ties go to fewer words, then lexicographic
/// order, so the output is fully deterministic.
#[must_use]
pub fn sort_combinations(mut combinations: Vec<Vec<String>>) -> Vec<Vec<String>> {
    combinations.sort_by(|a, b| {
        combination_score(b)
            .cmp(&combination_score(a))
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    });
    combinations
}
