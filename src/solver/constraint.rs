//! Per-letter occurrence and position constraints
//!
//! One [`LetterConstraint`] exists per alphabet letter for the lifetime of a
//! puzzle session. Feedback ingestion tightens the constraints; the trie
//! consults them through [`ConstraintSet::is_legal`] to decide which paths
//! are still worth keeping.

use crate::core::MAX_WORD_LEN;

/// Number of letters the constraint set tracks
pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase letter into the constraint array
///
/// # Panics
/// Panics on any byte outside `a..=z`; asking for an untracked letter is a
/// caller bug that must not be silently defaulted.
#[inline]
pub(crate) fn slot(letter: u8) -> usize {
    assert!(
        letter.is_ascii_lowercase(),
        "letter out of range: 0x{letter:02x}"
    );
    usize::from(letter - b'a')
}

/// Known legality rules for one letter
///
/// Tracks the positions the letter cannot or must occupy and bounds on how
/// many times it may occur. Bounds only ever tighten: `max_count` never
/// increases and `min_count` never decreases, with one exception — a
/// position exclusion reversed by a later confirmed occurrence restores one
/// unit of `max_count`.
#[derive(Debug, Clone)]
pub struct LetterConstraint {
    excluded: u32,
    confirmed: u32,
    min_count: usize,
    max_count: usize,
    at_large: bool,
}

impl LetterConstraint {
    fn new(word_len: usize) -> Self {
        Self {
            excluded: 0,
            confirmed: 0,
            min_count: 0,
            max_count: word_len,
            at_large: false,
        }
    }

    /// Minimum number of occurrences established so far
    #[inline]
    #[must_use]
    pub const fn min_count(&self) -> usize {
        self.min_count
    }

    /// Maximum number of occurrences still possible
    #[inline]
    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }

    /// Whether the letter is known to occur somewhere not yet pinned down
    #[inline]
    #[must_use]
    pub const fn is_at_large(&self) -> bool {
        self.at_large
    }

    /// Whether the letter is known not to occur at `position`
    #[inline]
    #[must_use]
    pub const fn is_excluded(&self, position: usize) -> bool {
        self.excluded & (1 << position) != 0
    }

    /// Whether the letter is confirmed to occur at `position`
    #[inline]
    #[must_use]
    pub const fn is_confirmed(&self, position: usize) -> bool {
        self.confirmed & (1 << position) != 0
    }
}

/// The full set of per-letter constraints for one puzzle session
///
/// Owned by the solver engine and passed by reference wherever legality
/// decisions are made.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    letters: [LetterConstraint; ALPHABET_LEN],
    word_len: usize,
}

impl ConstraintSet {
    /// Create fresh, fully-permissive constraints for `word_len`
    ///
    /// # Panics
    /// Panics if `word_len` is zero or exceeds [`MAX_WORD_LEN`]; the engine
    /// validates vocabulary lengths before constructing the set.
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        assert!(
            (1..=MAX_WORD_LEN).contains(&word_len),
            "word length {word_len} outside supported range"
        );
        Self {
            letters: std::array::from_fn(|_| LetterConstraint::new(word_len)),
            word_len,
        }
    }

    /// The session word length
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Read access to one letter's constraint record
    #[must_use]
    pub fn get(&self, letter: u8) -> &LetterConstraint {
        &self.letters[slot(letter)]
    }

    /// Can `letter` still be placed at `position` after `prefix`?
    ///
    /// Three tests, all of which must pass:
    /// - the position is not excluded for the letter,
    /// - the prefix does not already hold `max_count` copies,
    /// - every letter's outstanding minimum-count obligation (its
    ///   `min_count` minus occurrences already in the prefix, with the
    ///   hypothetical placement covering one unit of this letter's own
    ///   obligation) still fits strictly within the positions remaining
    ///   from `position` to the end of the word.
    #[must_use]
    pub fn is_legal(&self, letter: u8, position: usize, prefix: &[u8]) -> bool {
        let own = slot(letter);
        if self.letters[own].is_excluded(position) {
            return false;
        }

        let mut have = [0usize; ALPHABET_LEN];
        for &seen in prefix {
            have[slot(seen)] += 1;
        }

        if have[own] >= self.letters[own].max_count {
            return false;
        }

        let mut required = 0;
        for (index, other) in self.letters.iter().enumerate() {
            let mut outstanding = other.min_count.saturating_sub(have[index]);
            if index == own && outstanding > 0 {
                outstanding -= 1;
            }
            required += outstanding;
        }

        required < self.word_len - position
    }

    /// Record that `letter` cannot occur at `position`
    ///
    /// No-op when the position is already classified for the letter.
    /// Otherwise the position is excluded and `max_count` drops by one.
    /// `other_implied` signals a misplaced-letter report: the letter is
    /// known to occur elsewhere, so the first such report also raises
    /// `min_count` and flags the letter at-large. Repeat misplaced reports
    /// at other positions keep excluding but never stack the minimum.
    pub fn mark_illegal(&mut self, letter: u8, position: usize, other_implied: bool) {
        debug_assert!(position < self.word_len);
        let record = &mut self.letters[slot(letter)];
        if record.is_confirmed(position) || record.is_excluded(position) {
            return;
        }
        record.excluded |= 1 << position;
        record.max_count -= 1;
        if other_implied && !record.at_large {
            record.at_large = true;
            record.min_count += 1;
        }
    }

    /// Record a confirmed occurrence of `letter` at `position`
    ///
    /// No-op when already confirmed. A prior exclusion at the position is
    /// reversed, restoring one unit of `max_count`. An at-large letter is
    /// pinned (the flag clears without touching `min_count`); otherwise the
    /// confirmation is a fresh occurrence and `min_count` rises.
    pub fn mark_legal(&mut self, letter: u8, position: usize) {
        debug_assert!(position < self.word_len);
        let record = &mut self.letters[slot(letter)];
        if record.is_confirmed(position) {
            return;
        }
        if record.is_excluded(position) {
            record.excluded &= !(1 << position);
            record.max_count += 1;
        }
        record.confirmed |= 1 << position;
        if record.at_large {
            record.at_large = false;
        } else {
            record.min_count += 1;
        }
    }
}
