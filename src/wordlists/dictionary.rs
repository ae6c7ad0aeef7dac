//! Immutable dictionary handle
//!
//! The engine never reaches for a global word list. Callers build a
//! `Dictionary` once (from the embedded list or a file) and pass it by
//! reference; it is `Sync`, so one instance can serve parallel searches.

use rustc_hash::FxHashSet;

/// A normalized set of lowercase alphabetic words
///
/// Words are stored sorted, which makes every scan over the dictionary
/// (and therefore every result list) deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary word strings
    ///
    /// Each entry is trimmed and lowercased; entries that are empty or contain
    /// anything other than `a`..=`z` are dropped, and duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Cat", " dog ", "cat", "ice-cream", ""]);
    /// assert_eq!(dict.words(), &["cat".to_string(), "dog".to_string()]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        words.sort_unstable();
        words.dedup();

        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// The embedded common-word dictionary
    #[must_use]
    pub fn common() -> Self {
        Self::from_words(super::COMMON.iter().copied())
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over all words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        normalize(word).is_some_and(|w| self.index.contains(&w))
    }

    /// Words whose length lies in `min..=max`
    #[must_use]
    pub fn words_by_length(&self, min: usize, max: usize) -> Vec<&str> {
        self.iter()
            .filter(|w| (min..=max).contains(&w.len()))
            .collect()
    }

    /// Words beginning with `prefix` (case-insensitive)
    #[must_use]
    pub fn words_starting_with(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();

        // Sorted storage keeps every match in one contiguous run
        let start = self.words.partition_point(|w| w.as_str() < prefix.as_str());
        self.words[start..]
            .iter()
            .take_while(|w| w.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}

/// Trim and lowercase a word, rejecting anything that is not purely `a`..=`z`
fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["silent", "listen", "enlist", "line", "lint", "cat", "cast"])
    }

    #[test]
    fn normalizes_and_dedups() {
        let dict = Dictionary::from_words(["Apple", "apple", "  pear\r", "x1", "o'clock", "ÉTÉ"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words(), &["apple".to_string(), "pear".to_string()]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_words(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.contains("a"));
        assert!(dict.words_starting_with("a").is_empty());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = sample();
        assert!(dict.contains("listen"));
        assert!(dict.contains("LISTEN"));
        assert!(dict.contains(" Cat "));
        assert!(!dict.contains("dog"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn words_are_sorted() {
        let dict = sample();
        let words: Vec<&str> = dict.iter().collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
    }

    #[test]
    fn words_by_length_is_inclusive() {
        let dict = sample();
        assert_eq!(dict.words_by_length(3, 4), vec!["cast", "cat", "line", "lint"]);
        assert!(dict.words_by_length(7, 9).is_empty());
    }

    #[test]
    fn words_starting_with_prefix() {
        let dict = sample();
        assert_eq!(dict.words_starting_with("li"), vec!["line", "lint", "listen"]);
        assert_eq!(dict.words_starting_with("CA"), vec!["cast", "cat"]);
        assert!(dict.words_starting_with("zz").is_empty());
        assert_eq!(dict.words_starting_with("").len(), dict.len());
    }

    #[test]
    fn common_dictionary_loads() {
        let dict = Dictionary::common();
        assert!(!dict.is_empty());
        assert!(dict.contains("listen"));
        assert!(dict.contains("silent"));
    }
}
