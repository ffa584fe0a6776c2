//! Word solving command
//!
//! Self-play against a known target: the engine proposes guesses, the
//! scoring oracle answers, and the round loop runs until the word is found
//! or the guess budget runs out. Exhaustion is a normal unsuccessful
//! result, not an error.

use anyhow::{Context, Result, bail};

use crate::core::{Feedback, Word};
use crate::solver::{Solver, SolverError};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single round in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific target word over the given vocabulary
///
/// # Errors
///
/// Returns an error if the target word is invalid or has the wrong length,
/// or on an internal solver failure. Running out of guesses is reported via
/// `SolveResult::success`, and an emptied candidate space simply ends the
/// round loop early.
pub fn solve_word(config: &SolveConfig, vocabulary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str()).context("invalid target word")?;

    let mut solver = Solver::new(vocabulary)?;
    if target.letter_count() != solver.word_len() {
        bail!(
            "target '{}' has {} letters, the vocabulary has {}",
            target,
            target.letter_count(),
            solver.word_len()
        );
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.candidate_count();

        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(SolverError::NoCandidates) => break,
            Err(error) => return Err(error.into()),
        };

        let feedback = Feedback::score(&guess, &target);
        let solved = feedback.is_solved();

        solver.ingest_feedback(&feedback)?;
        let candidates_after = solver.candidate_count();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: [&str; 5] = ["crane", "trace", "place", "brake", "stale"];

    fn vocabulary() -> Vec<Word> {
        VOCAB.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn solve_finds_target_in_small_vocabulary() {
        // Each failed guess is pruned by its own feedback, so a budget of
        // the vocabulary size always suffices
        let mut config = SolveConfig::new("trace".to_string());
        config.max_guesses = VOCAB.len();

        let result = solve_word(&config, &vocabulary()).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "trace");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_records_candidate_counts() {
        let mut config = SolveConfig::new("stale".to_string());
        config.max_guesses = VOCAB.len();

        let result = solve_word(&config, &vocabulary()).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_respects_guess_budget() {
        let mut config = SolveConfig::new("trace".to_string());
        config.max_guesses = 1;

        let result = solve_word(&config, &vocabulary()).unwrap();
        assert!(result.guesses.len() <= 1);
    }

    #[test]
    fn solve_rejects_invalid_target() {
        let config = SolveConfig::new("not a word".to_string());
        assert!(solve_word(&config, &vocabulary()).is_err());
    }

    #[test]
    fn solve_rejects_wrong_length_target() {
        let config = SolveConfig::new("ox".to_string());
        assert!(solve_word(&config, &vocabulary()).is_err());
    }

    #[test]
    fn unreachable_target_exhausts_normally() {
        // "zebra" is a valid word but not in the vocabulary, so the budget
        // runs out without an error
        let config = SolveConfig::new("zebra".to_string());
        let result = solve_word(&config, &vocabulary()).unwrap();
        assert!(!result.success);
    }
}
