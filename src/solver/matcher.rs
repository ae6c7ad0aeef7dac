//! Single-word and wildcard matching
//!
//! Both matchers are a single parallel pass over the dictionary. Results
//! come back in dictionary order, each word at most once.

use crate::core::{LetterCounts, WildcardPattern};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// Check whether `word` can be spelled from `available`
///
/// This is a sub-multiset test, not a permutation test: unused letters in
/// `available` are allowed. Words with non-alphabetic characters never fit.
#[inline]
#[must_use]
pub fn can_form(available: &LetterCounts, word: &str) -> bool {
    LetterCounts::from_word(word).is_some_and(|needed| available.contains(&needed))
}

/// Find every dictionary word that can be built from the input letters
///
/// Cost is linear in dictionary size times word length; no permutations are
/// generated. The input does not have to be fully consumed.
///
/// # Examples
/// ```
/// use anagram_solver::solver::find_matches;
/// use anagram_solver::wordlists::Dictionary;
///
/// let dict = Dictionary::from_words(["silent", "listen", "enlist", "line", "lilt"]);
/// let matches = find_matches("listen", &dict);
/// assert_eq!(matches, vec!["enlist", "line", "listen", "silent"]);
/// ```
#[must_use]
pub fn find_matches(input: &str, dictionary: &Dictionary) -> Vec<String> {
    let available = LetterCounts::from_text(input);
    if available.is_empty() {
        return Vec::new();
    }

    let total = available.total();
    dictionary
        .words()
        .par_iter()
        .filter(|word| word.len() <= total && can_form(&available, word))
        .cloned()
        .collect()
}

/// Find every dictionary word matching a `?` wildcard pattern
///
/// # Examples
/// ```
/// use anagram_solver::solver::find_by_pattern;
/// use anagram_solver::wordlists::Dictionary;
///
/// let dict = Dictionary::from_words(["cat", "cot", "cut", "cast"]);
/// assert_eq!(find_by_pattern("c?t", &dict), vec!["cat", "cot", "cut"]);
/// ```
#[must_use]
pub fn find_by_pattern(pattern: &str, dictionary: &Dictionary) -> Vec<String> {
    find_by_wildcard(&WildcardPattern::new(pattern), dictionary)
}

/// [`find_by_pattern`] for an already parsed pattern
#[must_use]
pub fn find_by_wildcard(pattern: &WildcardPattern, dictionary: &Dictionary) -> Vec<String> {
    if pattern.is_empty() {
        return Vec::new();
    }

    dictionary
        .words()
        .par_iter()
        .filter(|word| word.len() == pattern.len() && pattern.matches(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(words: &[String]) -> HashSet<&str> {
        words.iter().map(String::as_str).collect()
    }

    #[test]
    fn listen_finds_anagrams_and_sub_words() {
        let dict = Dictionary::from_words(["silent", "listen", "enlist", "line"]);
        let matches = find_matches("listen", &dict);
        assert_eq!(
            as_set(&matches),
            HashSet::from(["silent", "listen", "enlist", "line"])
        );
    }

    #[test]
    fn respects_letter_multiplicity() {
        let dict = Dictionary::from_words(["lilt", "tilt", "lit", "till"]);
        assert_eq!(find_matches("lit", &dict), vec!["lit"]);
        assert_eq!(find_matches("lilt", &dict), vec!["lilt", "lit", "till"]);
        assert!(!find_matches("lilt", &dict).contains(&"tilt".to_string()));
    }

    #[test]
    fn every_match_is_feasible() {
        let dict = Dictionary::common();
        let input = "schoolmaster";
        let available = LetterCounts::from_text(input);

        let matches = find_matches(input, &dict);
        assert!(!matches.is_empty());
        for word in &matches {
            for letter in word.bytes() {
                let used = word.bytes().filter(|&b| b == letter).count() as u32;
                assert!(used <= available.get(letter), "{word} overdraws {letter}");
            }
        }
    }

    #[test]
    fn input_is_case_and_space_insensitive() {
        let dict = Dictionary::from_words(["games", "mage", "same"]);
        assert_eq!(find_matches("G A M E S", &dict), find_matches("games", &dict));
    }

    #[test]
    fn empty_input_or_dictionary() {
        let dict = Dictionary::from_words(["a", "at"]);
        assert!(find_matches("", &dict).is_empty());
        assert!(find_matches("   ", &dict).is_empty());
        assert!(find_matches("cat", &Dictionary::default()).is_empty());
    }

    #[test]
    fn can_form_rejects_non_alphabetic_words() {
        let available = LetterCounts::from_text("dont");
        assert!(can_form(&available, "dont"));
        assert!(!can_form(&available, "don't"));
    }

    #[test]
    fn pattern_example() {
        let dict = Dictionary::from_words(["cat", "cot", "cut", "cast"]);
        assert_eq!(
            as_set(&find_by_pattern("c?t", &dict)),
            HashSet::from(["cat", "cot", "cut"])
        );
    }

    #[test]
    fn pattern_is_case_insensitive() {
        let dict = Dictionary::from_words(["quiz", "quit", "quip"]);
        assert_eq!(find_by_pattern("QUI?", &dict), vec!["quip", "quit", "quiz"]);
        assert_eq!(find_by_pattern("??iz", &dict), vec!["quiz"]);
    }

    #[test]
    fn pattern_without_matches() {
        let dict = Dictionary::from_words(["cat", "cot"]);
        assert!(find_by_pattern("", &dict).is_empty());
        assert!(find_by_pattern("c?", &dict).is_empty());
        assert!(find_by_pattern("c1t", &dict).is_empty());
    }

    #[test]
    fn matching_is_idempotent() {
        let dict = Dictionary::common();
        assert_eq!(find_matches("garden", &dict), find_matches("garden", &dict));
        assert_eq!(find_by_pattern("?a?e", &dict), find_by_pattern("?a?e", &dict));
    }
}
