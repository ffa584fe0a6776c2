//! Core domain types
//!
//! Fundamental types shared by the solver and its collaborators: validated
//! words and per-position guess feedback. Everything here is pure and
//! dependency-free.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Verdict};
pub use word::{MAX_WORD_LEN, Word, WordError};
