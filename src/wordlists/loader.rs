//! Word list loading utilities
//!
//! Provides functions to load vocabularies from files or use the embedded
//! list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file
///
/// Lines that are empty, of a different length, or not purely alphabetic
/// are skipped, so an arbitrary dictionary file can be filtered down to a
/// playable vocabulary.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_trie::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.len() == word_len {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_trie::wordlists::loader::words_from_slice;
/// use wordle_trie::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&text| Word::new(text).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cr4ne", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_filters_by_length() {
        use crate::wordlists::WORDS;

        // The shipped list is the natural fixture: every word is 5 letters
        let words = load_from_file("data/words.txt", 5).unwrap();
        assert_eq!(words.len(), WORDS.len());

        let none = load_from_file("data/words.txt", 7).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("data/no_such_file.txt", 5).is_err());
    }
}
