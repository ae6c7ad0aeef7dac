//! Command implementations

pub mod anagram;
pub mod benchmark;
pub mod find;
pub mod multi;
pub mod rack;
pub mod score;
pub mod scrabble;

pub use anagram::{AnagramConfig, WordListResult, solve_anagram};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use find::{FindConfig, find_words};
pub use multi::{MultiConfig, MultiResult, ScoredCombination, solve_multi};
pub use rack::draw_and_solve;
pub use score::{ScoreResult, score_words};
pub use scrabble::{ScrabbleConfig, solve_scrabble};
