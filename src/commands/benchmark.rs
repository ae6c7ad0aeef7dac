//! Benchmark command
//!
//! Draws random racks and times single-word and multi-word searches on them.

use crate::core::TileBag;
use crate::solver::{DecomposeOptions, decompose_with_stats, find_matches};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub rack_size: usize,
    pub max_words: usize,
    pub options: DecomposeOptions,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize, rack_size: usize) -> Self {
        Self {
            count,
            rack_size,
            max_words: 2,
            options: DecomposeOptions::default(),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub total_combinations: usize,
    pub racks_with_combinations: usize,
    pub truncated_searches: usize,
    /// Length of the longest playable word -> number of racks
    pub longest_word_distribution: HashMap<usize, usize>,
    pub match_time: Duration,
    pub decompose_time: Duration,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Run the benchmark on `config.count` random racks
pub fn run_benchmark<R: Rng + ?Sized>(
    rng: &mut R,
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
) -> BenchmarkResult {
    let bag = TileBag::standard();

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut total_matches = 0;
    let mut total_combinations = 0;
    let mut racks_with_combinations = 0;
    let mut truncated_searches = 0;
    let mut longest_word_distribution: HashMap<usize, usize> = HashMap::new();
    let mut match_time = Duration::ZERO;
    let mut decompose_time = Duration::ZERO;

    let start = Instant::now();

    for _ in 0..config.count {
        let rack = bag.draw_rack(rng, config.rack_size);
        pb.set_message(rack.to_uppercase());

        let match_start = Instant::now();
        let matches = find_matches(&rack, dictionary);
        match_time += match_start.elapsed();

        let decompose_start = Instant::now();
        let decomposition =
            decompose_with_stats(&rack, dictionary, config.max_words, config.options);
        decompose_time += decompose_start.elapsed();

        let longest = matches.iter().map(String::len).max().unwrap_or(0);
        *longest_word_distribution.entry(longest).or_insert(0) += 1;

        total_matches += matches.len();
        total_combinations += decomposition.combinations.len();
        if !decomposition.combinations.is_empty() {
            racks_with_combinations += 1;
        }
        if decomposition.stats.truncated {
            truncated_searches += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_racks = config.count;

    BenchmarkResult {
        total_racks,
        total_matches,
        average_matches: if total_racks == 0 {
            0.0
        } else {
            total_matches as f64 / total_racks as f64
        },
        total_combinations,
        racks_with_combinations,
        truncated_searches,
        longest_word_distribution,
        match_time,
        decompose_time,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet(count: usize) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(count, 7);
        config.show_progress = false;
        config
    }

    #[test]
    fn benchmark_runs() {
        let dict = Dictionary::common();
        let result = run_benchmark(&mut StdRng::seed_from_u64(11), &quiet(10), &dict);

        assert_eq!(result.total_racks, 10);
        assert!(result.average_matches >= 0.0);
        assert!(result.racks_with_combinations <= result.total_racks);
        assert!(result.truncated_searches <= result.total_racks);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dict = Dictionary::common();
        let result = run_benchmark(&mut StdRng::seed_from_u64(12), &quiet(15), &dict);

        let distribution_sum: usize = result.longest_word_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_racks);
        for &length in result.longest_word_distribution.keys() {
            assert!(length <= 7);
        }
    }

    #[test]
    fn benchmark_zero_racks() {
        let dict = Dictionary::common();
        let result = run_benchmark(&mut StdRng::seed_from_u64(0), &quiet(0), &dict);

        assert_eq!(result.total_racks, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.average_matches.abs() < f64::EPSILON);
        assert!(result.longest_word_distribution.is_empty());
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let dict = Dictionary::common();
        let first = run_benchmark(&mut StdRng::seed_from_u64(77), &quiet(5), &dict);
        let second = run_benchmark(&mut StdRng::seed_from_u64(77), &quiet(5), &dict);

        assert_eq!(first.total_matches, second.total_matches);
        assert_eq!(first.total_combinations, second.total_combinations);
    }
}
