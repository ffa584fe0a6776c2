//! Puzzle session orchestration
//!
//! One [`Solver`] is built per puzzle from a vocabulary snapshot and owns
//! the constraint set, the candidate trie, and the letter-frequency table.
//! Each round: propose a guess, ingest the feedback, prune.

use rand::Rng;
use rustc_hash::FxHashSet;

use super::SolverError;
use super::constraint::ConstraintSet;
use super::frequency::FrequencyTable;
use super::trie::TrieNode;
use crate::core::{Feedback, Verdict, Word};

/// Solving engine for one puzzle session
pub struct Solver {
    word_len: usize,
    constraints: ConstraintSet,
    root: TrieNode,
    frequency: FrequencyTable,
}

impl Solver {
    /// Build a fresh session over a vocabulary snapshot
    ///
    /// Duplicate words are dropped. The frequency table is seeded from the
    /// full vocabulary and the trie is built once; both are maintained by
    /// feedback ingestion from then on.
    ///
    /// # Errors
    /// - [`SolverError::EmptyVocabulary`] when no words are given
    /// - [`SolverError::LengthMismatch`] when word lengths differ
    pub fn new(vocabulary: &[Word]) -> Result<Self, SolverError> {
        let first = vocabulary.first().ok_or(SolverError::EmptyVocabulary)?;
        let word_len = first.letter_count();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut unique: Vec<Word> = Vec::with_capacity(vocabulary.len());
        for word in vocabulary {
            if word.letter_count() != word_len {
                return Err(SolverError::LengthMismatch {
                    expected: word_len,
                    found: word.letter_count(),
                });
            }
            if seen.insert(word.text()) {
                unique.push(word.clone());
            }
        }

        let frequency = FrequencyTable::seeded(&unique);
        let root = TrieNode::build(&unique);

        Ok(Self {
            word_len,
            constraints: ConstraintSet::new(word_len),
            root,
            frequency,
        })
    }

    /// The session word length
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of live candidate words, per the latest prune
    #[inline]
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// The session constraint set
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Letter frequencies across the live vocabulary
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequency
    }

    /// Enumerate the live candidate words, alphabetically
    #[must_use]
    pub fn candidates(&self) -> Vec<Word> {
        let mut texts = Vec::new();
        self.root.live_words(&self.constraints, &mut texts);
        texts.into_iter().filter_map(|text| Word::new(text).ok()).collect()
    }

    /// Propose the next guess
    ///
    /// # Errors
    /// [`SolverError::NoCandidates`] when the candidate space is empty;
    /// [`SolverError::DeadEnd`] on an internal pruning inconsistency.
    pub fn next_guess(&self) -> Result<Word, SolverError> {
        self.next_guess_with(&mut rand::rng())
    }

    /// Propose the next guess using a caller-supplied RNG
    ///
    /// # Errors
    /// As [`Solver::next_guess`].
    pub fn next_guess_with<R: Rng>(&self, rng: &mut R) -> Result<Word, SolverError> {
        let text = self.root.select_guess(&self.constraints, rng)?;
        // Selection concatenates validated letters along a leaf path
        Ok(Word::new(text).expect("trie paths are valid words"))
    }

    /// Tighten constraints from one round of feedback, then prune
    ///
    /// Verdicts are applied per position, in order:
    /// - `Absent` excludes the letter from the whole word while nothing yet
    ///   requires the letter; once a minimum count is established (a
    ///   misplaced copy earlier in the same line, or a prior round) only
    ///   the reported position is excluded, since the verdict then means
    ///   "no further copies" rather than "not in the word".
    /// - `Misplaced` excludes the reported position and establishes the
    ///   letter's minimum count once.
    /// - `Correct` confirms the letter at the position and excludes every
    ///   other letter there.
    ///
    /// Afterwards the frequency table is zeroed and the trie re-pruned.
    ///
    /// # Errors
    /// [`SolverError::FeedbackLength`] when the feedback does not cover
    /// exactly one verdict per position.
    pub fn ingest_feedback(&mut self, feedback: &Feedback) -> Result<(), SolverError> {
        if feedback.len() != self.word_len {
            return Err(SolverError::FeedbackLength {
                expected: self.word_len,
                found: feedback.len(),
            });
        }

        for (position, &(letter, verdict)) in feedback.entries().iter().enumerate() {
            match verdict {
                Verdict::Absent => {
                    if self.constraints.get(letter).min_count() == 0 {
                        for index in 0..self.word_len {
                            self.constraints.mark_illegal(letter, index, false);
                        }
                    } else {
                        self.constraints.mark_illegal(letter, position, false);
                    }
                }
                Verdict::Misplaced => {
                    self.constraints.mark_illegal(letter, position, true);
                }
                Verdict::Correct => {
                    self.constraints.mark_legal(letter, position);
                    for other in b'a'..=b'z' {
                        if other != letter {
                            self.constraints.mark_illegal(other, position, false);
                        }
                    }
                }
            }
        }

        self.frequency.reset();
        self.root.prune(&self.constraints, &mut self.frequency);
        Ok(())
    }

    /// Drop a word the caller rejected, without any constraint change
    ///
    /// Used when a proposed guess turns out not to be an acceptable word.
    ///
    /// # Errors
    /// [`SolverError::LengthMismatch`] for a word of the wrong length;
    /// [`SolverError::UnknownWord`] when the word is not in the trie.
    pub fn discard_word(&mut self, word: &Word) -> Result<(), SolverError> {
        if word.letter_count() != self.word_len {
            return Err(SolverError::LengthMismatch {
                expected: self.word_len,
                found: word.letter_count(),
            });
        }
        self.root.remove_word(word.letters())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VOCAB: [&str; 5] = ["crane", "trace", "place", "brake", "stale"];

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn new_requires_words() {
        assert!(matches!(
            Solver::new(&[]),
            Err(SolverError::EmptyVocabulary)
        ));
    }

    #[test]
    fn new_requires_uniform_length() {
        let vocab = words(&["crane", "ox"]);
        assert!(matches!(
            Solver::new(&vocab),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 2
            })
        ));
    }

    #[test]
    fn new_drops_duplicates() {
        let vocab = words(&["crane", "crane", "trace"]);
        let solver = Solver::new(&vocab).unwrap();
        assert_eq!(solver.candidate_count(), 2);
    }

    #[test]
    fn new_seeds_frequency_table() {
        let solver = Solver::new(&words(&["crane", "trace"])).unwrap();
        assert_eq!(solver.frequencies().count(b'c'), 2);
        assert_eq!(solver.frequencies().count(b'n'), 1);
    }

    #[test]
    fn scoring_crane_against_trace_prunes_as_expected() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();

        let guess = Word::new("crane").unwrap();
        let secret = Word::new("trace").unwrap();
        let feedback = Feedback::score(&guess, &secret);
        assert_eq!(
            feedback.entries(),
            &[
                (b'c', Verdict::Misplaced),
                (b'r', Verdict::Correct),
                (b'a', Verdict::Correct),
                (b'n', Verdict::Absent),
                (b'e', Verdict::Correct),
            ]
        );

        solver.ingest_feedback(&feedback).unwrap();

        let live = solver.candidates();
        assert_eq!(texts(&live), vec!["trace"]);
        assert_eq!(solver.candidate_count(), 1);
    }

    #[test]
    fn correct_verdict_excludes_other_letters_at_position() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();

        let guess = Word::new("place").unwrap();
        let secret = Word::new("brake").unwrap();
        // P absent, L absent, A correct, C absent, E correct
        let feedback = Feedback::score(&guess, &secret);
        solver.ingest_feedback(&feedback).unwrap();

        let constraints = solver.constraints();
        for letter in b'a'..=b'z' {
            if letter != b'a' {
                assert!(
                    !constraints.is_legal(letter, 2, b"br"),
                    "letter {} should be excluded at position 2",
                    char::from(letter)
                );
            }
        }
        assert!(constraints.is_legal(b'a', 2, b"br"));
    }

    #[test]
    fn repeated_absent_verdicts_do_not_underflow() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let guess = Word::new("nnnnn").unwrap();
        let feedback = Feedback::parse("bn,bn,bn,bn,bn", &guess).unwrap();

        for _ in 0..3 {
            solver.ingest_feedback(&feedback).unwrap();
        }

        assert_eq!(solver.constraints().get(b'n').max_count(), 0);
        for position in 0..5 {
            assert!(!solver.constraints().is_legal(b'n', position, b""));
        }
    }

    #[test]
    fn absent_after_misplaced_keeps_required_letter() {
        // EASEL vs CRANE scores the first E misplaced and the second E
        // absent; the absent verdict must not erase the requirement that
        // an E occurs somewhere
        let mut solver = Solver::new(&words(&["crane", "easel", "place"])).unwrap();
        let feedback = Feedback::score(
            &Word::new("easel").unwrap(),
            &Word::new("crane").unwrap(),
        );
        solver.ingest_feedback(&feedback).unwrap();

        assert_eq!(solver.constraints().get(b'e').min_count(), 1);
        let live = solver.candidates();
        assert!(texts(&live).contains(&"crane"));
    }

    #[test]
    fn absent_then_correct_pins_exact_count() {
        // GEESE vs CRANE: early E's are absent, the final E is correct.
        // The whole-word exclusion is reversed at the confirmed position,
        // leaving exactly one E allowed at position 4.
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let feedback = Feedback::score(
            &Word::new("geese").unwrap(),
            &Word::new("crane").unwrap(),
        );
        solver.ingest_feedback(&feedback).unwrap();

        let record = solver.constraints().get(b'e');
        assert_eq!(record.max_count(), 1);
        assert_eq!(record.min_count(), 1);
        assert!(record.is_confirmed(4));
    }

    #[test]
    fn ingest_rejects_wrong_length() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let short = Feedback::score(&Word::new("ox").unwrap(), &Word::new("ax").unwrap());
        assert!(matches!(
            solver.ingest_feedback(&short),
            Err(SolverError::FeedbackLength {
                expected: 5,
                found: 2
            })
        ));
    }

    #[test]
    fn discard_word_removes_candidate() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let crane = Word::new("crane").unwrap();

        solver.discard_word(&crane).unwrap();
        assert_eq!(solver.candidate_count(), 4);
        assert!(!texts(&solver.candidates()).contains(&"crane"));

        assert!(matches!(
            solver.discard_word(&crane),
            Err(SolverError::UnknownWord(_))
        ));
    }

    #[test]
    fn discard_word_rejects_wrong_length() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let short = Word::new("ox").unwrap();
        assert!(matches!(
            solver.discard_word(&short),
            Err(SolverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn next_guess_comes_from_vocabulary() {
        let solver = Solver::new(&words(&VOCAB)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let guess = solver.next_guess_with(&mut rng).unwrap();
            assert!(VOCAB.contains(&guess.text()));
        }
    }

    #[test]
    fn self_play_reaches_the_secret() {
        // Every non-winning guess is pruned by its own feedback, so the
        // live set shrinks each round and the secret is reached within
        // the vocabulary size
        let vocab = words(&VOCAB);
        let secret = Word::new("trace").unwrap();
        let mut rng = StdRng::seed_from_u64(19);

        let mut solver = Solver::new(&vocab).unwrap();
        let mut solved = false;
        for _ in 0..VOCAB.len() {
            let guess = solver.next_guess_with(&mut rng).unwrap();
            let feedback = Feedback::score(&guess, &secret);
            if feedback.is_solved() {
                solved = true;
                break;
            }
            solver.ingest_feedback(&feedback).unwrap();
        }
        assert!(solved);
    }

    #[test]
    fn frequency_table_reflects_live_words_after_prune() {
        let mut solver = Solver::new(&words(&VOCAB)).unwrap();
        let feedback = Feedback::score(
            &Word::new("crane").unwrap(),
            &Word::new("trace").unwrap(),
        );
        solver.ingest_feedback(&feedback).unwrap();

        // Only "trace" is live: each of its letters counts once
        for letter in [b't', b'r', b'a', b'c', b'e'] {
            assert_eq!(solver.frequencies().count(letter), 1);
        }
        assert_eq!(solver.frequencies().count(b'n'), 0);
    }
}
