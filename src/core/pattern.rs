//! Crossword-style wildcard patterns
//!
//! A pattern is a fixed-length template such as `c?t`: each position holds
//! either a literal letter or the wildcard `?`, which stands for exactly one
//! arbitrary letter. Matching is case-insensitive and anchored at both ends.

use std::fmt;
use std::str::FromStr;

/// Wildcard symbol: exactly one arbitrary letter
pub const WILDCARD: char = '?';

/// One position of a wildcard pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Matches only this (lowercase) character
    Literal(char),
    /// Matches any single letter
    Any,
}

impl Slot {
    #[inline]
    fn matches(self, ch: char) -> bool {
        match self {
            Self::Literal(expected) => ch.to_lowercase().eq(std::iter::once(expected)),
            Self::Any => ch.is_alphabetic(),
        }
    }
}

/// A parsed wildcard pattern
///
/// Construction never fails. Characters other than `?` become literals, so a
/// pattern with a digit or punctuation mark is valid but matches no
/// dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardPattern {
    slots: Vec<Slot>,
}

impl WildcardPattern {
    /// Parse a pattern string
    ///
    /// Surrounding whitespace is trimmed; letters are case-folded.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::WildcardPattern;
    ///
    /// let pattern = WildcardPattern::new("C?T");
    /// assert!(pattern.matches("cat"));
    /// assert!(pattern.matches("cut"));
    /// assert!(!pattern.matches("cast"));
    /// ```
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let slots = pattern
            .trim()
            .chars()
            .map(|ch| {
                if ch == WILDCARD {
                    Slot::Any
                } else {
                    // Multi-char lowercase expansions are rare enough to take the first
                    Slot::Literal(ch.to_lowercase().next().unwrap_or(ch))
                }
            })
            .collect();
        Self { slots }
    }

    /// Number of positions (every match has exactly this many letters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for the empty pattern, which matches nothing in a dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of wildcard positions
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot == Slot::Any).count()
    }

    /// The pattern's positions in order
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Check whether `word` satisfies the pattern
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for &slot in &self.slots {
            match chars.next() {
                Some(ch) if slot.matches(ch) => {}
                _ => return false,
            }
        }
        chars.next().is_none()
    }
}

impl FromStr for WildcardPattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Literal(ch) => write!(f, "{ch}")?,
                Slot::Any => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literals_and_wildcards() {
        let pattern = WildcardPattern::new("c?T");
        assert_eq!(
            pattern.slots(),
            &[Slot::Literal('c'), Slot::Any, Slot::Literal('t')]
        );
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.wildcard_count(), 1);
    }

    #[test]
    fn matching_is_anchored() {
        let pattern = WildcardPattern::new("c?t");
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("cot"));
        assert!(!pattern.matches("cast"));
        assert!(!pattern.matches("ct"));
        assert!(!pattern.matches("scat"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let pattern = WildcardPattern::new("Q??Z");
        assert!(pattern.matches("quiz"));
        assert!(pattern.matches("QUIZ"));
    }

    #[test]
    fn wildcard_needs_a_letter() {
        let pattern = WildcardPattern::new("a?");
        assert!(pattern.matches("ax"));
        assert!(!pattern.matches("a1"));
        assert!(!pattern.matches("a"));
    }

    #[test]
    fn all_wildcards_match_by_length() {
        let pattern = WildcardPattern::new("????");
        assert!(pattern.matches("word"));
        assert!(!pattern.matches("words"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_word() {
        let pattern = WildcardPattern::new("   ");
        assert!(pattern.is_empty());
        assert!(pattern.matches(""));
        assert!(!pattern.matches("a"));
    }

    #[test]
    fn punctuation_is_literal() {
        let pattern = WildcardPattern::new("c.t");
        assert!(!pattern.matches("cat"));
        assert!(pattern.matches("c.t"));
    }

    #[test]
    fn display_round_trips_normalized_text() {
        let pattern: WildcardPattern = " S??Re ".parse().unwrap();
        assert_eq!(pattern.to_string(), "s??re");
    }
}
