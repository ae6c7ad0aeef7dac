//! Display functions for command results

use super::formatters::{format_combination, pluralize, score_bar};
use crate::commands::{BenchmarkResult, MultiResult, ScoreResult, WordListResult};
use colored::Colorize;

/// Print a scored word list under a heading
pub fn print_word_list(title: &str, result: &WordListResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}: {}",
        title.bright_cyan().bold(),
        result.query.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words found. Try different letters.".yellow());
        return;
    }

    println!("\nFound {}:\n", pluralize(result.words.len(), "word"));

    let best = result.best_score();
    for scored in &result.words {
        println!(
            "  {} {:>2} letters  {} {}",
            format!("{:<16}", scored.word.to_uppercase()).bright_white().bold(),
            scored.len(),
            score_bar(scored.score, best, 12).green(),
            format!("{} pts", scored.score).bright_yellow()
        );
    }
}

/// Print multi-word combinations with per-word and total scores
pub fn print_multi_result(result: &MultiResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MULTI-WORD ANAGRAMS:".bright_cyan().bold(),
        result.phrase.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.combinations.is_empty() {
        println!(
            "\n{}",
            "No multi-word anagrams found. Try a different phrase or longer input.".yellow()
        );
    } else {
        println!(
            "\nFound {}:\n",
            pluralize(result.combinations.len(), "multi-word anagram")
        );
        for combo in &result.combinations {
            let detail = combo
                .words
                .iter()
                .map(|w| format!("{w} ({} pts)", crate::core::score_of(w)))
                .collect::<Vec<_>>()
                .join(" • ");
            println!(
                "  {}  {}",
                format_combination(&combo.words).bright_white().bold(),
                format!("Total: {} points", combo.total_score).bright_yellow()
            );
            println!("    {}", detail.bright_black());
        }
    }

    if result.stats.truncated {
        println!(
            "\n{}",
            format!(
                "⚠ Stopped after {} results; narrow the phrase for a complete list",
                result.combinations.len()
            )
            .yellow()
        );
    }

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Candidates:       {}", result.stats.candidates);
        println!("   Nodes expanded:   {}", result.stats.nodes_expanded);
        println!("   Memo hits:        {}", result.stats.memo_hits);
        println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    }
}

/// Print word scores and their total
pub fn print_score_result(result: &ScoreResult) {
    println!();
    for scored in &result.words {
        println!(
            "  {} {}",
            format!("{:<16}", scored.word.to_uppercase()).bright_white().bold(),
            format!("{} pts", scored.score).bright_yellow()
        );
    }
    if result.words.len() > 1 {
        println!("  {}", "─".repeat(24).bright_black());
        println!(
            "  {} {}",
            format!("{:<16}", "TOTAL").bright_cyan().bold(),
            format!("{} pts", result.total).bright_yellow().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks tested:     {}", result.total_racks);
    println!(
        "   Average matches:  {}",
        format!("{:.1}", result.average_matches).bright_yellow().bold()
    );
    println!(
        "   Multi-word hits:  {} racks ({} combinations)",
        result.racks_with_combinations, result.total_combinations
    );
    println!("   Truncated:        {}", result.truncated_searches);
    println!("   Matching time:    {:.3}s", result.match_time.as_secs_f64());
    println!(
        "   Decompose time:   {:.3}s",
        result.decompose_time.as_secs_f64()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    if result.total_racks == 0 {
        return;
    }

    println!("\n📈 {}", "Longest playable word:".bright_cyan().bold());
    let mut lengths: Vec<usize> = result.longest_word_distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = result.longest_word_distribution[&length];
        let pct = (count as f64 / result.total_racks as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
