//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use crate::solver::Suggestion;
use colored::Colorize;

/// One ranking row: frequency, heuristic score, expected remaining, word
#[must_use]
pub fn suggestion_line(suggestion: &Suggestion) -> String {
    format!(
        "freq: {:<8} score: {:<5} exp: {:<5.2}: {}",
        suggestion.frequency,
        suggestion.heuristic_score,
        suggestion.expected_remaining,
        suggestion.word
    )
}

/// Feedback letters as colored tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(_, mark, letter)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match mark {
                Mark::Exact => tile.black().on_green().to_string(),
                Mark::Misplaced => tile.black().on_yellow().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
