//! Formatting utilities for terminal output

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar in the style used by every long-running job
#[must_use]
pub fn styled_progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(message);
    pb
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Join words for display, eliding anything past `limit`
#[must_use]
pub fn word_summary<T: std::fmt::Display>(words: &[T], limit: usize) -> String {
    let shown: Vec<String> = words.iter().take(limit).map(ToString::to_string).collect();
    let mut text = shown.join(", ");
    if words.len() > limit {
        text.push_str(&format!(", … (+{} more)", words.len() - limit));
    }
    text
}
