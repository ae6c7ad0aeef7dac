//! Multi-word anagram decomposition
//!
//! Partitions the letters of an input phrase into up to `max_words`
//! dictionary words that use every letter exactly once.
//!
//! # Algorithm
//! 1. Candidate preparation: keep only words that are long enough, no longer
//!    than the input, purely alphabetic, and individually spellable from the
//!    input. Letter counts are computed once here, never during the search.
//! 2. Candidates are ordered longest first (ties alphabetical) so that the
//!    remaining-letter budget empties quickly.
//! 3. Depth-first backtracking over candidate indices in non-decreasing
//!    order, so each multiset of words is produced once and never as a
//!    permutation of an earlier result.
//! 4. Search states `(words chosen, remaining letters, next index)` are
//!    memoized together with the completions found beneath them; revisiting
//!    a state replays those completions instead of expanding it again.
//! 5. A global `max_results` cutoff aborts the whole search.

use crate::core::LetterCounts;
use crate::wordlists::Dictionary;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::ops::ControlFlow;

/// Default cap on the number of combinations returned
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Default minimum length of each component word
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// An ordered group of dictionary words whose letters exactly cover the input
pub type WordCombination = Vec<String>;

/// Search limits for [`decompose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposeOptions {
    /// Hard global cap on the number of combinations
    pub max_results: usize,
    /// Component words shorter than this are never used
    pub min_word_length: usize,
}

impl DecomposeOptions {
    #[must_use]
    pub const fn new(max_results: usize, min_word_length: usize) -> Self {
        Self {
            max_results,
            min_word_length,
        }
    }
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS, DEFAULT_MIN_WORD_LENGTH)
    }
}

/// Counters describing one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words that survived candidate preparation
    pub candidates: usize,
    /// Search nodes expanded (memo replays excluded)
    pub nodes_expanded: usize,
    /// Revisited states answered from the memo
    pub memo_hits: usize,
    /// True when the `max_results` cutoff stopped the search
    pub truncated: bool,
}

/// Combinations plus the statistics of the search that produced them
#[derive(Debug, Clone, Default)]
pub struct Decomposition {
    pub combinations: Vec<WordCombination>,
    pub stats: SearchStats,
}

/// Find all ways to spell the input as 1..=`max_words` dictionary words
///
/// Every combination uses each input letter exactly once. Whitespace, case
/// and non-letters in the input are ignored. An empty input, a zero word
/// budget or a zero result cap yields no combinations. Output order is the
/// search order; use [`crate::solver::sort_combinations`] for display order.
///
/// # Examples
/// ```
/// use anagram_solver::solver::{DecomposeOptions, decompose};
/// use anagram_solver::wordlists::Dictionary;
///
/// let dict = Dictionary::from_words(["a", "b"]);
/// let combos = decompose("ab", &dict, 2, DecomposeOptions::new(10, 1));
/// assert_eq!(combos, vec![vec!["a".to_string(), "b".to_string()]]);
/// ```
#[must_use]
pub fn decompose(
    input: &str,
    dictionary: &Dictionary,
    max_words: usize,
    options: DecomposeOptions,
) -> Vec<WordCombination> {
    decompose_with_stats(input, dictionary, max_words, options).combinations
}

/// [`decompose`], also reporting search statistics
#[must_use]
pub fn decompose_with_stats(
    input: &str,
    dictionary: &Dictionary,
    max_words: usize,
    options: DecomposeOptions,
) -> Decomposition {
    let letters = LetterCounts::from_text(input);
    if letters.is_empty() || max_words == 0 {
        return Decomposition::default();
    }

    let candidates = prepare_candidates(&letters, dictionary, options.min_word_length);
    debug!(
        "Decomposing '{}' ({} letters): {} of {} words are candidates",
        letters,
        letters.total(),
        candidates.len(),
        dictionary.len()
    );

    let mut search = Search::new(&candidates, letters, max_words, options.max_results);
    // Break only signals the result cap; the results gathered so far stand
    let _ = search.explore(0);

    let stats = SearchStats {
        candidates: candidates.len(),
        ..search.stats
    };
    debug!(
        "Found {} combinations: {} nodes expanded, {} memo hits{}",
        search.results.len(),
        stats.nodes_expanded,
        stats.memo_hits,
        if stats.truncated { " (truncated)" } else { "" }
    );

    let combinations = search
        .results
        .iter()
        .map(|indices| {
            indices
                .iter()
                .map(|&i| candidates[i].word.to_string())
                .collect()
        })
        .collect();

    Decomposition {
        combinations,
        stats,
    }
}

/// A dictionary word with its letter counts precomputed
#[derive(Debug, Clone)]
struct Candidate<'d> {
    word: &'d str,
    counts: LetterCounts,
    len: usize,
}

/// Filter and order the words that could take part in a combination
fn prepare_candidates<'d>(
    letters: &LetterCounts,
    dictionary: &'d Dictionary,
    min_word_length: usize,
) -> Vec<Candidate<'d>> {
    let total = letters.total();

    let mut candidates: Vec<Candidate<'d>> = dictionary
        .words()
        .par_iter()
        .filter_map(|word| {
            let len = word.len();
            if len < min_word_length || len > total {
                return None;
            }
            let counts = LetterCounts::from_word(word)?;
            letters.contains(&counts).then_some(Candidate {
                word: word.as_str(),
                counts,
                len,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.len.cmp(&a.len).then_with(|| a.word.cmp(b.word)));
    candidates
}

/// (words chosen so far, remaining letters, lowest eligible candidate index)
type MemoKey = (usize, LetterCounts, usize);

/// Backtracking state for one decomposition
struct Search<'c, 'd> {
    candidates: &'c [Candidate<'d>],
    max_words: usize,
    max_results: usize,
    remaining: LetterCounts,
    remaining_total: usize,
    chosen: Vec<usize>,
    /// Completed combinations as candidate indices
    results: Vec<Vec<usize>>,
    /// Completions (index suffixes) found beneath each expanded state
    memo: FxHashMap<MemoKey, Vec<Vec<usize>>>,
    stats: SearchStats,
}

impl<'c, 'd> Search<'c, 'd> {
    fn new(
        candidates: &'c [Candidate<'d>],
        letters: LetterCounts,
        max_words: usize,
        max_results: usize,
    ) -> Self {
        Self {
            candidates,
            max_words,
            max_results,
            remaining: letters,
            remaining_total: letters.total(),
            chosen: Vec::with_capacity(max_words),
            results: Vec::new(),
            memo: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Explore every extension of `chosen` using candidates from `start` on
    ///
    /// Returns `Break` once the result cap is reached.
    fn explore(&mut self, start: usize) -> ControlFlow<()> {
        if self.results.len() >= self.max_results {
            self.stats.truncated = true;
            return ControlFlow::Break(());
        }

        // An exact match is complete; it is never extended further
        if self.remaining_total == 0 && !self.chosen.is_empty() {
            self.results.push(self.chosen.clone());
            return ControlFlow::Continue(());
        }

        if self.chosen.len() >= self.max_words {
            return ControlFlow::Continue(());
        }

        let key = (self.chosen.len(), self.remaining, start);
        if self.memo.contains_key(&key) {
            self.stats.memo_hits += 1;
            return self.replay(&key);
        }

        self.stats.nodes_expanded += 1;
        let first_result = self.results.len();
        let candidates = self.candidates;

        for (index, candidate) in candidates.iter().enumerate().skip(start) {
            // Cheap length check before the full feasibility test
            if candidate.len > self.remaining_total || !self.remaining.contains(&candidate.counts)
            {
                continue;
            }

            self.remaining.subtract(&candidate.counts);
            self.remaining_total -= candidate.len;
            self.chosen.push(index);

            let flow = self.explore(index);

            self.chosen.pop();
            self.remaining_total += candidate.len;
            self.remaining.add(&candidate.counts);

            if flow.is_break() {
                return flow;
            }
        }

        let depth = self.chosen.len();
        let completions = self.results[first_result..]
            .iter()
            .map(|result| result[depth..].to_vec())
            .collect();
        self.memo.insert(key, completions);

        ControlFlow::Continue(())
    }

    /// Re-emit the completions recorded for an already expanded state
    fn replay(&mut self, key: &MemoKey) -> ControlFlow<()> {
        let Some(completions) = self.memo.get(key) else {
            return ControlFlow::Continue(());
        };

        for completion in completions {
            if self.results.len() >= self.max_results {
                self.stats.truncated = true;
                return ControlFlow::Break(());
            }
            let mut result = self.chosen.clone();
            result.extend_from_slice(completion);
            self.results.push(result);
        }

        ControlFlow::Continue(())
    }
}
