//! Post-search result filters
//!
//! Length bounds from the word finder, prefix and suffix from the Scrabble
//! helper. All bounds are inclusive and text comparisons case-insensitive.

/// Filter applied to a word list after matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl WordFilter {
    /// A filter that keeps every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_length: 0,
            max_length: None,
            prefix: None,
            suffix: None,
        }
    }

    #[must_use]
    pub const fn with_length(mut self, min_length: usize, max_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Require a prefix; blank prefixes are ignored
    #[must_use]
    pub fn with_prefix(mut self, prefix: Option<&str>) -> Self {
        self.prefix = normalize_affix(prefix);
        self
    }

    /// Require a suffix; blank suffixes are ignored
    #[must_use]
    pub fn with_suffix(mut self, suffix: Option<&str>) -> Self {
        self.suffix = normalize_affix(suffix);
        self
    }

    /// Check a single word against every bound
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_length || self.max_length.is_some_and(|max| len > max) {
            return false;
        }

        let lower = word.to_lowercase();
        self.prefix.as_deref().is_none_or(|p| lower.starts_with(p))
            && self.suffix.as_deref().is_none_or(|s| lower.ends_with(s))
    }

    /// Keep only accepted words, preserving order
    #[must_use]
    pub fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().filter(|w| self.accepts(w)).collect()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_affix(affix: Option<&str>) -> Option<String> {
    affix
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn default_keeps_everything() {
        let input = words(&["a", "bb", "ccc"]);
        assert_eq!(WordFilter::default().apply(input.clone()), input);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let filter = WordFilter::new().with_length(2, Some(3));
        assert_eq!(
            filter.apply(words(&["a", "bb", "ccc", "dddd"])),
            words(&["bb", "ccc"])
        );
    }

    #[test]
    fn open_ended_max_length() {
        let filter = WordFilter::new().with_length(3, None);
        assert_eq!(
            filter.apply(words(&["at", "cat", "scatter"])),
            words(&["cat", "scatter"])
        );
    }

    #[test]
    fn prefix_and_suffix_are_case_insensitive() {
        let filter = WordFilter::new()
            .with_prefix(Some("ST"))
            .with_suffix(Some(" E "));
        assert_eq!(
            filter.apply(words(&["stare", "stone", "star", "state", "tease"])),
            words(&["stare", "stone", "state"])
        );
    }

    #[test]
    fn blank_affixes_are_ignored() {
        let filter = WordFilter::new().with_prefix(Some("  ")).with_suffix(None);
        assert_eq!(filter.prefix, None);
        assert!(filter.accepts("anything"));
    }
}
