//! Bounded, sorted list of the best-scoring guesses

use crate::core::Word;
use std::cmp::Ordering;

/// A guess and its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

impl<'a> ScoredWord<'a> {
    #[must_use]
    pub const fn new(word: &'a Word, score: f64) -> Self {
        Self { word, score }
    }
}

/// Keeps at most `capacity` entries, best first
///
/// Entries with equal scores keep their insertion order, so feeding
/// candidates in vocabulary order makes ties resolve to the earlier word.
#[derive(Debug, Clone)]
pub struct TopK<'a> {
    capacity: usize,
    entries: Vec<ScoredWord<'a>>,
}

impl<'a> TopK<'a> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Offer a candidate; returns whether it was kept
    ///
    /// A full list only accepts a candidate that strictly beats its last
    /// entry.
    pub fn offer(&mut self, word: &'a Word, score: f64) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let full = self.entries.len() >= self.capacity;
        if full
            && self
                .entries
                .last()
                .is_some_and(|last| score.total_cmp(&last.score) != Ordering::Greater)
        {
            return false;
        }

        self.entries.push(ScoredWord::new(word, score));
        // sort_by is stable
        self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        self.entries.truncate(self.capacity);
        true
    }

    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord<'a>> {
        self.entries.first()
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoredWord<'a>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ScoredWord<'a>> {
        self.entries
    }
}
