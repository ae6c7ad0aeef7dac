//! Anagram Solver
//!
//! A word-matching engine for word games: letter-rack anagrams, crossword
//! wildcard patterns, Scrabble scoring, and multi-word anagram decomposition.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::core::score_of;
//! use anagram_solver::solver::{DecomposeOptions, decompose, find_matches};
//! use anagram_solver::wordlists::Dictionary;
//!
//! let dict = Dictionary::from_words(["silent", "listen", "enlist", "line"]);
//!
//! // Every word spellable from the letters
//! let words = find_matches("listen", &dict);
//! assert_eq!(words.len(), 4);
//!
//! // Every way to use all the letters in up to two words
//! let combos = decompose("listen silent", &dict, 2, DecomposeOptions::default());
//! assert!(combos.contains(&vec!["enlist".to_string(), "silent".to_string()]));
//!
//! assert_eq!(score_of("quiz"), 22);
//! ```

// Core domain types
pub mod core;

// Matching algorithms
pub mod solver;

// Dictionary and word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup for the CLI
pub mod logging;
