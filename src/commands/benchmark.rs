//! Benchmark command
//!
//! Plays many rounds against randomly drawn secrets and reports solve rate,
//! average guess count, and the guess distribution.

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::{Feedback, Word};
use crate::solver::{Solver, SolverError};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub rounds: usize,
    pub max_guesses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub rounds: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub solve_rate: f64,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run the benchmark: each round draws a secret from the vocabulary (with
/// replacement) and plays a fresh engine against it
///
/// # Errors
///
/// Returns an error when the vocabulary is empty or on an internal solver
/// failure; unsolved rounds are counted, not errors.
pub fn run_benchmark(vocabulary: &[Word], config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let mut rng = rand::rng();

    let progress = ProgressBar::new(config.rounds as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..config.rounds {
        let Some(secret) = vocabulary.choose(&mut rng) else {
            bail!("vocabulary contains no words");
        };

        let mut solver = Solver::new(vocabulary)?;
        let mut used = 0;
        let mut found = false;

        for _ in 0..config.max_guesses {
            used += 1;

            let guess = match solver.next_guess() {
                Ok(guess) => guess,
                Err(SolverError::NoCandidates) => break,
                Err(error) => return Err(error.into()),
            };

            let feedback = Feedback::score(&guess, secret);
            if feedback.is_solved() {
                found = true;
                break;
            }
            solver.ingest_feedback(&feedback)?;
        }

        if found {
            solved += 1;
        }
        total_guesses += used;
        *distribution.entry(used).or_insert(0) += 1;
        progress.inc(1);
    }

    progress.finish_and_clear();
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        rounds: config.rounds,
        solved,
        total_guesses,
        average_guesses: total_guesses as f64 / config.rounds as f64,
        solve_rate: 100.0 * solved as f64 / config.rounds as f64,
        distribution,
        duration,
        rounds_per_second: config.rounds as f64 / duration.as_secs_f64(),
    })
}
