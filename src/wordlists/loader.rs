//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-separated word file
///
/// Blank lines and `#` comments are skipped; entries that are not purely
/// alphabetic are dropped with a warning count.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_solver::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words_alpha.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dict = parse_word_list(&content);
    debug!("Loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}

/// Parse the contents of a word list file
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let rejected = entries
        .iter()
        .filter(|entry| !entry.chars().all(|c| c.is_ascii_alphabetic()))
        .count();
    if rejected > 0 {
        warn!("Skipped {rejected} non-alphabetic entries");
    }

    Dictionary::from_words(entries)
}

/// Resolve the `--wordlist` flag: `common` for the embedded list, otherwise a path
///
/// # Errors
///
/// Returns an I/O error if a path was given and cannot be read.
pub fn load_wordlist(wordlist: &str) -> io::Result<Dictionary> {
    match wordlist {
        "common" => Ok(Dictionary::common()),
        path => load_from_file(path),
    }
}
