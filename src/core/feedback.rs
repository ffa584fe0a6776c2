//! Per-letter guess feedback
//!
//! A feedback line classifies every position of a guess as absent,
//! misplaced, or correct. This module holds the verdict enumeration, the
//! scoring oracle that derives feedback from a known answer, and the
//! human-readable line codec (`bc,yr,ga,bn,ge` style).

use super::Word;
use std::fmt;

/// Classification of one guess letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The letter does not occur in the word (beyond copies already
    /// accounted for)
    Absent,
    /// The letter occurs in the word but not at this position
    Misplaced,
    /// The letter occurs at exactly this position
    Correct,
}

impl Verdict {
    /// One-character encoding used in feedback lines
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Misplaced => 'y',
            Self::Correct => 'g',
        }
    }

    /// Decode the one-character encoding
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Self::Absent),
            'y' => Some(Self::Misplaced),
            'g' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Ordered per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    entries: Vec<(u8, Verdict)>,
}

/// Error type for malformed feedback lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { expected: usize, found: usize },
    BadGroup(String),
    BadVerdict(char),
    LetterMismatch { position: usize, expected: char, found: char },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Expected {expected} feedback groups, found {found}")
            }
            Self::BadGroup(group) => {
                write!(f, "Malformed feedback group '{group}', expected <verdict><letter>")
            }
            Self::BadVerdict(symbol) => {
                write!(f, "Unknown verdict symbol '{symbol}', expected b, y or g")
            }
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "Feedback letter '{found}' at position {position} does not match guess letter '{expected}'"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Score a guess against a known answer
    ///
    /// Implements the standard feedback rules, including duplicate
    /// handling: exact matches are marked first and consume the answer's
    /// letter multiplicity, then misplaced verdicts are assigned left to
    /// right from the remaining pool.
    ///
    /// # Panics
    /// Panics if `guess` and `answer` differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// assert_eq!(feedback.entries()[1], (b'r', Verdict::Correct));
    /// assert_eq!(feedback.entries()[0], (b'c', Verdict::Misplaced));
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        assert_eq!(
            guess.letter_count(),
            answer.letter_count(),
            "guess and answer must have the same length"
        );

        let len = guess.letter_count();
        let mut available = [0usize; 26];
        for &letter in answer.letters() {
            available[usize::from(letter - b'a')] += 1;
        }

        let mut verdicts = vec![Verdict::Absent; len];

        // First pass: exact matches consume the answer's pool
        for position in 0..len {
            if guess.letter_at(position) == answer.letter_at(position) {
                verdicts[position] = Verdict::Correct;
                available[usize::from(guess.letter_at(position) - b'a')] -= 1;
            }
        }

        // Second pass: misplaced letters, left to right, from what is left
        for position in 0..len {
            if verdicts[position] == Verdict::Correct {
                continue;
            }
            let slot = usize::from(guess.letter_at(position) - b'a');
            if available[slot] > 0 {
                verdicts[position] = Verdict::Misplaced;
                available[slot] -= 1;
            }
        }

        let entries = guess.letters().iter().copied().zip(verdicts).collect();
        Self { entries }
    }

    /// The `(letter, verdict)` pairs in guess order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(u8, Verdict)] {
        &self.entries
    }

    /// Number of positions covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no positions are covered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every position is correct, i.e. the puzzle is solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.entries
            .iter()
            .all(|&(_, verdict)| verdict == Verdict::Correct)
    }

    /// Encode as a feedback line: `<verdict><letter>` groups joined by commas
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &Word::new("trace").unwrap());
    /// assert_eq!(feedback.encode(), "yc,gr,ga,bn,ge");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(self.entries.len() * 3);
        for (index, &(letter, verdict)) in self.entries.iter().enumerate() {
            if index > 0 {
                line.push(',');
            }
            line.push(verdict.symbol());
            line.push(char::from(letter));
        }
        line
    }

    /// Parse a feedback line entered for `guess`
    ///
    /// The line must consist of exactly one two-character group per guess
    /// letter, comma separated, where the first character is a verdict
    /// symbol (`b`, `y`, `g`) and the second repeats the guess letter at
    /// that position. Anything else is rejected.
    ///
    /// # Errors
    /// Returns `FeedbackError` describing the first offending group.
    pub fn parse(line: &str, guess: &Word) -> Result<Self, FeedbackError> {
        let groups: Vec<&str> = line.trim().split(',').collect();
        if groups.len() != guess.letter_count() {
            return Err(FeedbackError::LengthMismatch {
                expected: guess.letter_count(),
                found: groups.len(),
            });
        }

        let mut entries = Vec::with_capacity(groups.len());
        for (position, group) in groups.iter().enumerate() {
            let mut chars = group.chars();
            let (Some(symbol), Some(letter), None) = (chars.next(), chars.next(), chars.next())
            else {
                return Err(FeedbackError::BadGroup((*group).to_string()));
            };

            let verdict =
                Verdict::from_symbol(symbol).ok_or(FeedbackError::BadVerdict(symbol))?;
            let expected = char::from(guess.letter_at(position));
            if letter != expected {
                return Err(FeedbackError::LetterMismatch {
                    position,
                    expected,
                    found: letter,
                });
            }

            entries.push((guess.letter_at(position), verdict));
        }

        Ok(Self { entries })
    }
}
