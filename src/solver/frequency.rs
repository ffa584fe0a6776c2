//! Letter occurrence counts across the live vocabulary
//!
//! Seeded once from the full vocabulary when a session starts, then zeroed
//! and rebuilt as a side effect of every prune pass so it always reflects
//! the words still in play.

use super::constraint::{ALPHABET_LEN, slot};
use crate::core::Word;

/// Occurrence count per letter over the currently-live vocabulary
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
}

impl FrequencyTable {
    /// An all-zero table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from letter counts across `words`
    #[must_use]
    pub fn seeded(words: &[Word]) -> Self {
        let mut table = Self::new();
        for word in words {
            for &letter in word.letters() {
                table.counts[slot(letter)] += 1;
            }
        }
        table
    }

    /// Zero every count, ready for a rebuild
    pub fn reset(&mut self) {
        self.counts = [0; ALPHABET_LEN];
    }

    /// Add `occurrences` to a letter's count
    pub fn record(&mut self, letter: u8, occurrences: usize) {
        self.counts[slot(letter)] += occurrences;
    }

    /// Current count for a letter
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts[slot(letter)]
    }

    /// Letters with non-zero counts, most frequent first
    ///
    /// Ties break alphabetically so the ordering is stable.
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| (char::from(b'a' + index as u8), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn seeded_counts_letters() {
        let table = FrequencyTable::seeded(&words(&["crane", "trace"]));
        assert_eq!(table.count(b'c'), 2);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b'a'), 2);
        assert_eq!(table.count(b'e'), 2);
        assert_eq!(table.count(b'n'), 1);
        assert_eq!(table.count(b't'), 1);
        assert_eq!(table.count(b'z'), 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut table = FrequencyTable::seeded(&words(&["crane"]));
        table.reset();
        for letter in b'a'..=b'z' {
            assert_eq!(table.count(letter), 0);
        }
    }

    #[test]
    fn record_accumulates() {
        let mut table = FrequencyTable::new();
        table.record(b'e', 3);
        table.record(b'e', 2);
        assert_eq!(table.count(b'e'), 5);
    }

    #[test]
    fn ranked_orders_by_count_then_letter() {
        let mut table = FrequencyTable::new();
        table.record(b'e', 5);
        table.record(b'a', 3);
        table.record(b'r', 3);
        table.record(b'q', 1);
        assert_eq!(
            table.ranked(),
            vec![('e', 5), ('a', 3), ('r', 3), ('q', 1)]
        );
    }
}
