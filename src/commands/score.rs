//! Score command

use crate::core::ScoredWord;

/// Scores for a list of words
pub struct ScoreResult {
    pub words: Vec<ScoredWord>,
    pub total: u32,
}

/// Score each word and the list as a whole
#[must_use]
pub fn score_words<S: AsRef<str>>(words: &[S]) -> ScoreResult {
    let words: Vec<ScoredWord> = words
        .iter()
        .map(|w| ScoredWord::new(w.as_ref().trim().to_lowercase()))
        .collect();
    let total = words.iter().map(|w| w.score).sum();
    ScoreResult { words, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_each_word_and_total() {
        let result = score_words(&["QUIZ", "cat"]);
        assert_eq!(result.words[0].word, "quiz");
        assert_eq!(result.words[0].score, 22);
        assert_eq!(result.words[1].score, 5);
        assert_eq!(result.total, 27);
    }

    #[test]
    fn empty_list() {
        let result = score_words::<&str>(&[]);
        assert!(result.words.is_empty());
        assert_eq!(result.total, 0);
    }
}
