//! Anagram Solver - CLI
//!
//! Anagram, word finder, Scrabble and multi-word anagram tools on top of the
//! matching engine.

use anagram_solver::{
    commands::{
        AnagramConfig, BenchmarkConfig, FindConfig, MultiConfig, ScrabbleConfig, draw_and_solve,
        find::{DEFAULT_FIND_MAX_LENGTH, DEFAULT_FIND_MIN_LENGTH},
        find_words,
        multi::DEFAULT_MAX_WORDS,
        run_benchmark, score_words,
        scrabble::DEFAULT_SCRABBLE_MIN_LENGTH,
        solve_anagram, solve_multi, solve_scrabble,
    },
    core::RACK_SIZE,
    logging::init_logger,
    output::{print_benchmark_result, print_multi_result, print_score_result, print_word_list},
    solver::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_WORD_LENGTH, DecomposeOptions, SortCriterion},
    wordlists::{Dictionary, loader::load_wordlist},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Anagram, word finder, Scrabble and multi-word anagram solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'common' (default, embedded) or path to a newline-separated word file
    #[arg(short = 'w', long, global = true, default_value = "common")]
    wordlist: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every word that can be made from your letters
    Anagram {
        /// Letters to unscramble (up to 20)
        letters: String,

        /// Sort order: length (default), alphabetical, score
        #[arg(short, long, default_value = "length")]
        sort: String,
    },

    /// Find words from letters or a ? wildcard pattern, within a length range
    Find {
        /// Letters to use
        letters: Option<String>,

        /// Pattern such as c?t (? = any one letter); takes precedence over letters
        #[arg(short, long)]
        pattern: Option<String>,

        /// Minimum word length
        #[arg(long, default_value_t = DEFAULT_FIND_MIN_LENGTH)]
        min_length: usize,

        /// Maximum word length
        #[arg(long, default_value_t = DEFAULT_FIND_MAX_LENGTH)]
        max_length: usize,

        /// Sort order: length (default), alphabetical, score
        #[arg(short, long, default_value = "length")]
        sort: String,
    },

    /// Find the highest-scoring Scrabble plays for your tiles
    Scrabble {
        /// Your tiles (may be empty when a prefix or suffix is given)
        #[arg(default_value = "")]
        tiles: String,

        /// Words must start with these letters
        #[arg(long)]
        prefix: Option<String>,

        /// Words must end with these letters
        #[arg(long)]
        suffix: Option<String>,

        /// Minimum word length
        #[arg(long, default_value_t = DEFAULT_SCRABBLE_MIN_LENGTH)]
        min_length: usize,
    },

    /// Split a phrase into combinations of words that use every letter
    Multi {
        /// Phrase or letters (up to 30 characters)
        phrase: String,

        /// Maximum number of words per combination (1-3)
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Stop after this many combinations
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Ignore component words shorter than this
        #[arg(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
        min_word_length: usize,

        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the Scrabble score of one or more words
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Draw a random rack from a standard tile bag and solve it
    Rack {
        /// Number of tiles to draw
        #[arg(short, long, default_value_t = RACK_SIZE)]
        size: usize,

        /// Seed for a reproducible rack
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Benchmark single-word and multi-word searches on random racks
    Benchmark {
        /// Number of random racks to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Tiles per rack
        #[arg(short, long, default_value_t = RACK_SIZE)]
        size: usize,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let dictionary = load_wordlist(&cli.wordlist)
        .with_context(|| format!("Failed to load wordlist '{}'", cli.wordlist))?;
    debug!("Dictionary ready: {} words", dictionary.len());
    if dictionary.is_empty() {
        warn!("Wordlist '{}' contains no usable words", cli.wordlist);
    }

    match cli.command {
        Commands::Anagram { letters, sort } => run_anagram_command(letters, &sort, &dictionary),
        Commands::Find {
            letters,
            pattern,
            min_length,
            max_length,
            sort,
        } => {
            let config = FindConfig {
                letters,
                pattern,
                min_length,
                max_length,
                sort: SortCriterion::from_name(&sort),
            };
            let result = find_words(&config, &dictionary)?;
            print_word_list("Word finder", &result);
            Ok(())
        }
        Commands::Scrabble {
            tiles,
            prefix,
            suffix,
            min_length,
        } => {
            let config = ScrabbleConfig {
                tiles,
                prefix,
                suffix,
                min_length,
            };
            let result = solve_scrabble(&config, &dictionary)?;
            print_word_list("Scrabble plays", &result);
            Ok(())
        }
        Commands::Multi {
            phrase,
            max_words,
            max_results,
            min_word_length,
            verbose,
        } => {
            let config = MultiConfig {
                phrase,
                max_words,
                options: DecomposeOptions::new(max_results, min_word_length),
            };
            let result = solve_multi(&config, &dictionary)?;
            print_multi_result(&result, verbose);
            Ok(())
        }
        Commands::Score { words } => {
            print_score_result(&score_words(&words));
            Ok(())
        }
        Commands::Rack { size, seed } => {
            let result = match seed {
                Some(seed) => draw_and_solve(&mut StdRng::seed_from_u64(seed), size, &dictionary),
                None => draw_and_solve(&mut rand::rng(), size, &dictionary),
            };
            print_word_list("Random rack", &result);
            Ok(())
        }
        Commands::Benchmark { count, size, seed } => {
            run_benchmark_command(count, size, seed, &dictionary);
            Ok(())
        }
    }
}

fn run_anagram_command(letters: String, sort: &str, dictionary: &Dictionary) -> Result<()> {
    let mut config = AnagramConfig::new(letters);
    config.sort = SortCriterion::from_name(sort);
    if config.sort == SortCriterion::Unsorted {
        warn!("Unknown sort order '{sort}', leaving results in dictionary order");
    }

    let result = solve_anagram(&config, dictionary)?;
    print_word_list("Anagrams", &result);
    Ok(())
}

fn run_benchmark_command(count: usize, size: usize, seed: Option<u64>, dictionary: &Dictionary) {
    println!("Running benchmark on {count} random racks of {size} tiles...");

    let config = BenchmarkConfig::new(count, size);
    let result = match seed {
        Some(seed) => run_benchmark(&mut StdRng::seed_from_u64(seed), &config, dictionary),
        None => run_benchmark(&mut rand::rng(), &config, dictionary),
    };
    print_benchmark_result(&result);
}
