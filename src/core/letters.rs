//! Letter frequency model
//!
//! A `LetterCounts` is a multiset over the 26 lowercase ASCII letters. Every
//! matching operation in the crate is expressed in terms of it: a word can be
//! built from some letters exactly when its counts are a sub-multiset of theirs.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter occurrence counts for `a`..=`z`
///
/// Counts never go negative: [`LetterCounts::subtract`] is only valid after
/// [`LetterCounts::contains`] has confirmed feasibility, and
/// [`LetterCounts::checked_sub`] is the fallible alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterCounts {
    /// An all-zero multiset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build the multiset of a free-form string
    ///
    /// Letters are case-folded; whitespace, digits, punctuation and non-ASCII
    /// characters are ignored. Empty input yields an all-zero multiset.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_text("Listen Silent!");
    /// assert_eq!(counts.get(b'l'), 2);
    /// assert_eq!(counts.get(b's'), 2);
    /// assert_eq!(counts.total(), 12);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::new();
        for byte in text.bytes() {
            let lower = byte.to_ascii_lowercase();
            if lower.is_ascii_lowercase() {
                counts.counts[usize::from(lower - b'a')] += 1;
            }
        }
        counts
    }

    /// Build the multiset of a dictionary word
    ///
    /// Unlike [`LetterCounts::from_text`], any character outside `a`..=`z`
    /// (after case-folding) rejects the whole word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = Self::new();
        for byte in word.bytes() {
            let lower = byte.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return None;
            }
            counts.counts[usize::from(lower - b'a')] += 1;
        }
        Some(counts)
    }

    /// Count of a single letter (case-insensitive); 0 for non-letters
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u32 {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.counts[usize::from(lower - b'a')]
        } else {
            0
        }
    }

    /// Total number of letters in the multiset
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// True when every count is zero
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sub-multiset feasibility: can `other` be taken out of `self`?
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::LetterCounts;
    ///
    /// let rack = LetterCounts::from_text("listen");
    /// assert!(rack.contains(&LetterCounts::from_text("line")));
    /// assert!(!rack.contains(&LetterCounts::from_text("lilt")));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Remove `other`'s letters in place
    ///
    /// Callers must check [`LetterCounts::contains`] first.
    #[inline]
    pub fn subtract(&mut self, other: &Self) {
        debug_assert!(self.contains(other), "subtraction would underflow");
        for (have, need) in self.counts.iter_mut().zip(other.counts.iter()) {
            *have -= need;
        }
    }

    /// Add `other`'s letters in place (the undo of [`LetterCounts::subtract`])
    #[inline]
    pub fn add(&mut self, other: &Self) {
        for (have, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *have += extra;
        }
    }

    /// Checked difference, `None` if `other` is not a sub-multiset
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if !self.contains(other) {
            return None;
        }
        let mut result = *self;
        result.subtract(other);
        Some(result)
    }

    /// Iterate over `(letter, count)` pairs with a non-zero count
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (b'a'..=b'z')
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}

impl fmt::Display for LetterCounts {
    /// Sorted letters, e.g. `eilnst` for "listen"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.iter() {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_ignores_case_and_non_letters() {
        let counts = LetterCounts::from_text("A-b c!A 3é");
        assert_eq!(counts.get(b'a'), 2);
        assert_eq!(counts.get(b'b'), 1);
        assert_eq!(counts.get(b'c'), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn from_text_empty_is_all_zero() {
        let counts = LetterCounts::from_text("");
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts, LetterCounts::new());

        assert!(LetterCounts::from_text("  \t ").is_empty());
    }

    #[test]
    fn from_word_rejects_non_alphabetic() {
        assert!(LetterCounts::from_word("don't").is_none());
        assert!(LetterCounts::from_word("ice cream").is_none());
        assert!(LetterCounts::from_word("abc1").is_none());
        assert_eq!(
            LetterCounts::from_word("Cat"),
            Some(LetterCounts::from_text("cat"))
        );
    }

    #[test]
    fn get_is_case_insensitive() {
        let counts = LetterCounts::from_text("speed");
        assert_eq!(counts.get(b'e'), 2);
        assert_eq!(counts.get(b'E'), 2);
        assert_eq!(counts.get(b'z'), 0);
        assert_eq!(counts.get(b'!'), 0);
    }

    #[test]
    fn contains_is_sub_multiset_test() {
        let rack = LetterCounts::from_text("listen");
        assert!(rack.contains(&LetterCounts::from_text("silent")));
        assert!(rack.contains(&LetterCounts::from_text("line")));
        assert!(rack.contains(&LetterCounts::new()));
        // Needs two l's
        assert!(!rack.contains(&LetterCounts::from_text("lilt")));
        assert!(!rack.contains(&LetterCounts::from_text("listens")));
    }

    #[test]
    fn subtract_then_add_restores() {
        let original = LetterCounts::from_text("schoolmaster");
        let word = LetterCounts::from_text("school");

        let mut working = original;
        working.subtract(&word);
        assert_eq!(working, LetterCounts::from_text("master"));

        working.add(&word);
        assert_eq!(working, original);
    }

    #[test]
    fn checked_sub_refuses_overdraw() {
        let rack = LetterCounts::from_text("cat");
        assert_eq!(
            rack.checked_sub(&LetterCounts::from_text("at")),
            Some(LetterCounts::from_text("c"))
        );
        assert_eq!(rack.checked_sub(&LetterCounts::from_text("catt")), None);
    }

    #[test]
    fn iter_yields_only_present_letters() {
        let counts = LetterCounts::from_text("banana");
        let pairs: Vec<(u8, u32)> = counts.iter().collect();
        assert_eq!(pairs, vec![(b'a', 3), (b'b', 1), (b'n', 2)]);
    }

    #[test]
    fn display_is_sorted_letters() {
        assert_eq!(LetterCounts::from_text("Listen").to_string(), "eilnst");
        assert_eq!(LetterCounts::new().to_string(), "");
    }
}
