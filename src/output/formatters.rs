//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Feedback, Verdict};

/// Render feedback in puzzle colors: green for correct, yellow for
/// misplaced, dim for absent
#[must_use]
pub fn colorize_feedback(feedback: &Feedback) -> String {
    feedback
        .entries()
        .iter()
        .map(|&(letter, verdict)| {
            let shown = char::from(letter).to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => shown.bright_green().bold().to_string(),
                Verdict::Misplaced => shown.bright_yellow().to_string(),
                Verdict::Absent => shown.dimmed().to_string(),
            }
        })
        .collect()
}

/// Create a histogram bar string
#[must_use]
pub fn histogram_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
