//! Interactive assistant mode
//!
//! Proposes guesses round by round; the player reports the puzzle's colors
//! back as a feedback line (`bc,yr,ga,bn,ge` style). Guesses the puzzle
//! refuses to accept can be struck from the candidate trie without touching
//! the constraints.

use std::io::{self, Write as _};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::core::{Feedback, Word};
use crate::output::display::print_letter_rankings;
use crate::output::formatters::colorize_feedback;
use crate::solver::{Solver, SolverError};

/// Run the interactive assistant over the given vocabulary
///
/// # Errors
///
/// Returns an error on I/O failure, when the candidate space empties (the
/// entered feedback must have been inconsistent), or on an internal solver
/// failure. Running out of guesses ends the session normally.
pub fn run_play(vocabulary: &[Word], max_guesses: usize) -> Result<()> {
    let mut solver = Solver::new(vocabulary)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll propose guesses; after each one, type the puzzle's colors");
    println!("as one group per letter, comma separated:\n");
    println!("  - b = letter absent (gray)");
    println!("  - y = letter present but misplaced (yellow)");
    println!("  - g = letter correct (green)\n");
    println!("  e.g. {} for a guess of CRANE\n", "bc,yr,ga,bn,ge".bold());

    for round in 1..=max_guesses {
        let guess = loop {
            let guess = match solver.next_guess() {
                Ok(guess) => guess,
                Err(SolverError::NoCandidates) => {
                    bail!("no candidate words remain; check the feedback you entered")
                }
                Err(error) => return Err(error.into()),
            };

            println!(
                "Guess #{round}: {}  ({} candidates)",
                guess.text().to_uppercase().bright_yellow().bold(),
                solver.candidate_count()
            );

            if prompt_line("Word recognized? [Y/n]")?.trim() != "n" {
                break guess;
            }
            solver.discard_word(&guess)?;
        };

        let feedback = read_feedback(&guess)?;
        println!("Guess #{round} result: {}\n", colorize_feedback(&feedback));

        solver.ingest_feedback(&feedback)?;

        if feedback.is_solved() {
            println!(
                "{}",
                format!("✅ Solved in {round} {}!", plural_guesses(round))
                    .green()
                    .bold()
            );
            return Ok(());
        }

        let remaining = solver.candidates();
        if remaining.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &remaining {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        } else {
            print_letter_rankings(solver.frequencies(), 5);
        }
    }

    println!(
        "{}",
        format!("❌ Out of guesses after {max_guesses} rounds").red().bold()
    );
    Ok(())
}

const fn plural_guesses(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

/// Keep prompting until the player enters a well-formed feedback line
fn read_feedback(guess: &Word) -> Result<Feedback> {
    loop {
        let line = prompt_line("Enter result")?;
        match Feedback::parse(&line, guess) {
            Ok(feedback) => return Ok(feedback),
            Err(error) => {
                println!("{} {error}", "Invalid feedback:".red());
                println!("Format: <b|y|g><letter>,... matching the guess, e.g. bc,yr,ga,bn,ge\n");
            }
        }
    }
}

/// Get user input with a prompt
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}
