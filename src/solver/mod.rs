//! Word matching algorithms
//!
//! Single-word letter matching, wildcard patterns, result filtering and
//! ordering, and multi-word decomposition. Every function here takes the
//! dictionary by reference and keeps no state between calls.

pub mod decompose;
mod filter;
mod matcher;
mod sort;

pub use decompose::{
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_WORD_LENGTH, DecomposeOptions, Decomposition, SearchStats,
    WordCombination, decompose, decompose_with_stats,
};
pub use filter::WordFilter;
pub use matcher::{can_form, find_by_pattern, find_by_wildcard, find_matches};
pub use sort::{SortCriterion, sort_combinations, sort_words};
