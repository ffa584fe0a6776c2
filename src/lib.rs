//! Wordle Trie Solver
//!
//! Solves Wordle-style puzzles by tightening per-letter count and position
//! constraints from guess feedback and walking a pruned prefix trie of the
//! remaining vocabulary to pick each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_trie::core::{Feedback, Word};
//! use wordle_trie::solver::Solver;
//!
//! let vocabulary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//! let secret = Word::new("trace").unwrap();
//!
//! let mut solver = Solver::new(&vocabulary).unwrap();
//! let guess = solver.next_guess().unwrap();
//! let feedback = Feedback::score(&guess, &secret);
//! if !feedback.is_solved() {
//!     solver.ingest_feedback(&feedback).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Constraint tracking and trie search
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Word lists
pub mod wordlists;
