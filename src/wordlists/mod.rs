//! Word lists
//!
//! Provides the embedded vocabulary compiled into the binary plus loading
//! utilities for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
