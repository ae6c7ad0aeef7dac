//! Formatting utilities for terminal output

/// Render a combination as `ENLIST + SILENT`
#[must_use]
pub fn format_combination<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// "1 word" / "3 words"
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a word's score relative to the best score in its list
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}
