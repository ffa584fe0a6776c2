//! Display functions for command results

use colored::Colorize;

use super::formatters::{colorize_feedback, histogram_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::FrequencyTable;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (index, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            index + 1,
            colorize_feedback(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Feedback:   {}", step.feedback.encode());
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Solved:           {} ({})",
        result.solved,
        format!("{:.1}%", result.solve_rate).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📊 {}", "Guess distribution:".bright_cyan().bold());
    let peak = result.distribution.values().copied().max().unwrap_or(0);
    let mut used_counts: Vec<usize> = result.distribution.keys().copied().collect();
    used_counts.sort_unstable();
    for used in used_counts {
        let count = result.distribution[&used];
        println!(
            "   {used}: {} {count}",
            histogram_bar(count, peak, 30).green()
        );
    }
    println!();
}

/// Print the most frequent letters across the live vocabulary
pub fn print_letter_rankings(frequency: &FrequencyTable, top: usize) {
    let ranked = frequency.ranked();
    if ranked.is_empty() {
        return;
    }
    let letters: Vec<String> = ranked
        .iter()
        .take(top)
        .map(|(letter, _)| letter.to_uppercase().to_string())
        .collect();
    println!("Most common remaining letters: {}\n", letters.join(", ").cyan());
}
