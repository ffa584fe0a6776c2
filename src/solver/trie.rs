//! Candidate trie with liveness pruning and weighted guess selection
//!
//! One trie level per letter position. Each node knows its letter, its
//! position, and the prefix leading to it, so legality can be re-checked at
//! any time against the session's [`ConstraintSet`]. Subtree sizes count the
//! live complete words below a node and are recomputed bottom-up by every
//! prune pass.

use rand::Rng;
use rustc_hash::FxHashMap;

use super::SolverError;
use super::constraint::ConstraintSet;
use super::frequency::FrequencyTable;
use crate::core::Word;

/// One node of the candidate trie
///
/// The root carries no letter and acts as the sentinel before position 0;
/// its children sit at position 0. Every other node represents placing
/// `letter` at `position` after `prefix`.
#[derive(Debug)]
pub struct TrieNode {
    letter: Option<u8>,
    position: usize,
    prefix: Vec<u8>,
    children: FxHashMap<u8, TrieNode>,
    subtree_size: usize,
    is_leaf: bool,
}

impl TrieNode {
    /// Build a trie over `vocabulary`
    ///
    /// Words sharing a prefix collapse onto the same path; a node is marked
    /// as a leaf where a word terminates. Subtree sizes are accumulated
    /// bottom-up during construction. The caller is expected to pass words
    /// of uniform length with duplicates already removed.
    #[must_use]
    pub fn build(vocabulary: &[Word]) -> Self {
        let mut root = Self {
            letter: None,
            position: 0,
            prefix: Vec::new(),
            children: FxHashMap::default(),
            subtree_size: 0,
            is_leaf: false,
        };
        let suffixes: Vec<&[u8]> = vocabulary.iter().map(Word::letters).collect();
        root.add_suffixes(&suffixes);
        root
    }

    /// Live complete words below this node, per the latest prune
    #[inline]
    #[must_use]
    pub const fn subtree_size(&self) -> usize {
        self.subtree_size
    }

    /// Position the children of this node occupy
    fn child_position(&self) -> usize {
        if self.letter.is_some() {
            self.position + 1
        } else {
            0
        }
    }

    /// Letters from the root through this node
    fn path(&self) -> Vec<u8> {
        let mut path = self.prefix.clone();
        if let Some(letter) = self.letter {
            path.push(letter);
        }
        path
    }

    fn add_suffixes(&mut self, suffixes: &[&[u8]]) {
        let child_position = self.child_position();
        let child_prefix = self.path();

        let mut pending: FxHashMap<u8, Vec<&[u8]>> = FxHashMap::default();
        for &suffix in suffixes {
            let Some((&first, rest)) = suffix.split_first() else {
                continue;
            };
            self.children.entry(first).or_insert_with(|| Self {
                letter: Some(first),
                position: child_position,
                prefix: child_prefix.clone(),
                children: FxHashMap::default(),
                subtree_size: 0,
                is_leaf: false,
            });
            if !rest.is_empty() {
                pending.entry(first).or_default().push(rest);
            }
        }

        let letters: Vec<u8> = self.children.keys().copied().collect();
        for letter in letters {
            let rest = pending.remove(&letter);
            let Some(child) = self.children.get_mut(&letter) else {
                continue;
            };
            let gained = match rest {
                Some(tails) => {
                    child.add_suffixes(&tails);
                    child.subtree_size
                }
                None => {
                    child.is_leaf = true;
                    1
                }
            };
            self.subtree_size += gained;
        }
    }

    /// Does this node's letter-position assignment still satisfy the
    /// constraints? The root is always active.
    fn is_active(&self, constraints: &ConstraintSet) -> bool {
        self.letter
            .is_none_or(|letter| constraints.is_legal(letter, self.position, &self.prefix))
    }

    /// Bottom-up prune pass
    ///
    /// An inactive node contributes nothing and is not descended into; it
    /// stays in place because a later confirmed occurrence can reverse an
    /// exclusion and revive it. An active node recomputes its size from its
    /// children, deleting any active child whose subtree emptied and which
    /// is not itself a leaf. Every active node with a letter also records
    /// its contribution into the session frequency table.
    pub fn prune(&mut self, constraints: &ConstraintSet, frequency: &mut FrequencyTable) {
        self.subtree_size = 0;
        if !self.is_active(constraints) {
            return;
        }

        let letters: Vec<u8> = self.children.keys().copied().collect();
        for letter in letters {
            let Some(child) = self.children.get_mut(&letter) else {
                continue;
            };
            child.prune(constraints, frequency);
            if !child.is_active(constraints) {
                // Dormant branch: contributes nothing, kept for revival
                continue;
            }
            let child_size = child.subtree_size;
            let child_is_leaf = child.is_leaf;

            if child_size == 0 && !child_is_leaf {
                self.children.remove(&letter);
            } else {
                self.subtree_size += child_size + usize::from(child_is_leaf);
            }
        }

        if let Some(letter) = self.letter {
            frequency.record(letter, self.subtree_size + usize::from(self.is_leaf));
        }
    }

    /// Walk from this node to a leaf, picking one active child per step
    ///
    /// Per step: with probability 9/10 the candidate set is restricted to
    /// children whose letter has not appeared in the path so far (falling
    /// back to all active children when that empties the set); candidates
    /// are ordered by descending subtree size; the pick is
    /// `(k - 1) - floor(log2(draw))` for a uniform `draw` in `[1, 2^k - 1]`,
    /// which favors large subtrees while leaving every child reachable.
    ///
    /// # Errors
    /// [`SolverError::NoCandidates`] when the root has no active children
    /// left; [`SolverError::DeadEnd`] when an interior node has none, which
    /// indicates a pruning bug rather than an empty vocabulary.
    pub fn select_guess<R: Rng>(
        &self,
        constraints: &ConstraintSet,
        rng: &mut R,
    ) -> Result<String, SolverError> {
        let mut letters = Vec::new();
        self.select_into(constraints, rng, &mut letters)?;
        Ok(letters.iter().map(|&letter| char::from(letter)).collect())
    }

    fn select_into<R: Rng>(
        &self,
        constraints: &ConstraintSet,
        rng: &mut R,
        out: &mut Vec<u8>,
    ) -> Result<(), SolverError> {
        if self.is_leaf {
            return Ok(());
        }

        let mut ranked: Vec<(u8, &Self)> = self
            .children
            .iter()
            .filter(|(_, child)| child.is_active(constraints))
            .map(|(&letter, child)| (letter, child))
            .collect();

        if ranked.is_empty() {
            return Err(if self.letter.is_none() {
                SolverError::NoCandidates
            } else {
                SolverError::DeadEnd {
                    prefix: String::from_utf8_lossy(&self.path()).into_owned(),
                }
            });
        }

        // Nine steps out of ten, prefer letters not already in the path
        if rng.random_range(0..10) != 0 {
            let path = self.path();
            let fresh: Vec<(u8, &Self)> = ranked
                .iter()
                .copied()
                .filter(|(letter, _)| !path.contains(letter))
                .collect();
            if !fresh.is_empty() {
                ranked = fresh;
            }
        }

        ranked.sort_by(|a, b| b.1.subtree_size.cmp(&a.1.subtree_size).then(a.0.cmp(&b.0)));

        let draw = rng.random_range(1..(1u64 << ranked.len()));
        let index = (ranked.len() - 1) - draw.ilog2() as usize;
        let (letter, child) = ranked[index];
        out.push(letter);
        child.select_into(constraints, rng, out)
    }

    /// Delete exactly one word from the trie without touching constraints
    ///
    /// Walks the word's path; the terminal leaf signals removal upward, and
    /// each ancestor decrements its subtree size, dropping any child whose
    /// subtree emptied. Returns whether this node's own subtree emptied so
    /// the parent can continue the cascade.
    ///
    /// # Errors
    /// [`SolverError::UnknownWord`] when the word's path is not present.
    pub fn remove_word(&mut self, word: &[u8]) -> Result<bool, SolverError> {
        if self.is_leaf {
            return Ok(true);
        }

        let unknown = || SolverError::UnknownWord(String::from_utf8_lossy(word).into_owned());
        let index = self.child_position();
        let &next = word.get(index).ok_or_else(unknown)?;
        let child = self.children.get_mut(&next).ok_or_else(unknown)?;

        if child.remove_word(word)? {
            self.children.remove(&next);
        }
        self.subtree_size -= 1;
        Ok(self.subtree_size == 0)
    }

    /// Collect the currently-live complete words below this node
    ///
    /// Inactive subtrees are skipped, mirroring what the next prune pass
    /// would keep. Output is sorted by construction (children visited in
    /// letter order).
    pub fn live_words(&self, constraints: &ConstraintSet, out: &mut Vec<String>) {
        if !self.is_active(constraints) {
            return;
        }
        if self.is_leaf {
            out.push(self.path().iter().map(|&letter| char::from(letter)).collect());
            return;
        }
        let mut letters: Vec<u8> = self.children.keys().copied().collect();
        letters.sort_unstable();
        for letter in letters {
            if let Some(child) = self.children.get(&letter) {
                child.live_words(constraints, out);
            }
        }
    }
}
