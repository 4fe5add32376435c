//! Per-round scoring context
//!
//! One `ScoringContext` is built per selection round and shared read-only by
//! every scorer and worker thread. Distribution tables are derived lazily,
//! at most once per context.

use super::global::OccurrenceHistogram;
use super::local::PositionFrequencies;
use crate::clue::Clue;
use crate::core::{Alphabet, Word};
use std::sync::OnceLock;

/// Immutable snapshot of everything a scorer may look at
pub struct ScoringContext<'a> {
    alphabet: &'a Alphabet,
    clue: Clue,
    answers: &'a [Word],
    guesses: &'a [Word],
    possible_answers: Vec<&'a Word>,
    possible_guesses: Vec<&'a Word>,
    game_progress: f64,
    position_frequencies: OnceLock<PositionFrequencies>,
    occurrence_histogram: OnceLock<OccurrenceHistogram>,
}

impl<'a> ScoringContext<'a> {
    /// Build the context for one round
    ///
    /// Filters both vocabularies through `clue` once, up front. The clue is
    /// a snapshot owned by the context.
    ///
    /// # Parameters
    /// - `alphabet`: symbols of the run
    /// - `clue`: everything learned so far
    /// - `answers`: words that can be the secret
    /// - `guesses`: words allowed as input
    /// - `game_progress`: round index over max rounds, in `[0, 1)`
    #[must_use]
    pub fn new(
        alphabet: &'a Alphabet,
        clue: Clue,
        answers: &'a [Word],
        guesses: &'a [Word],
        game_progress: f64,
    ) -> Self {
        debug_assert!(
            (0.0..1.0).contains(&game_progress),
            "game progress must lie in [0, 1)"
        );

        let possible_answers = clue.filter(answers);
        let possible_guesses = clue.filter(guesses);

        Self {
            alphabet,
            clue,
            answers,
            guesses,
            possible_answers,
            possible_guesses,
            game_progress,
            position_frequencies: OnceLock::new(),
            occurrence_histogram: OnceLock::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn clue(&self) -> &Clue {
        &self.clue
    }

    /// Full answer vocabulary
    #[inline]
    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answers
    }

    /// Full guess vocabulary
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &'a [Word] {
        self.guesses
    }

    /// Answers still consistent with the clue
    #[inline]
    #[must_use]
    pub fn possible_answers(&self) -> &[&'a Word] {
        &self.possible_answers
    }

    /// Guesses still consistent with the clue
    #[inline]
    #[must_use]
    pub fn possible_guesses(&self) -> &[&'a Word] {
        &self.possible_guesses
    }

    #[inline]
    #[must_use]
    pub const fn game_progress(&self) -> f64 {
        self.game_progress
    }

    /// Word length of the round
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.clue.len()
    }

    /// Per-position symbol frequencies over the possible answers
    pub(crate) fn position_frequencies(&self) -> &PositionFrequencies {
        self.position_frequencies
            .get_or_init(|| PositionFrequencies::build(&self.possible_answers, self.word_len()))
    }

    /// Per-symbol "at least n copies" counts over the possible answers
    pub(crate) fn occurrence_histogram(&self) -> &OccurrenceHistogram {
        self.occurrence_histogram
            .get_or_init(|| OccurrenceHistogram::build(&self.possible_answers, self.word_len()))
    }
}
