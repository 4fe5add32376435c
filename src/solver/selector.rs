//! Picking the next guess

use super::context::ScoringContext;
use super::strategy::Scorer;
use super::topk::{ScoredWord, TopK};
use crate::clue::Clue;
use crate::core::{Alphabet, ClueError, MAX_WORD_LEN, Word, WordError};
use log::{debug, trace};
use rayon::prelude::*;

/// Receives progress while a round is being scored
///
/// `scored` may be called from several worker threads at once.
pub trait Progress: Sync {
    /// Scoring is about to start on `total` candidates
    fn start(&self, total: usize);

    /// One more candidate has been scored
    fn scored(&self);

    /// All candidates have been scored
    fn finish(&self);
}

/// Silent progress
impl Progress for () {
    fn start(&self, _total: usize) {}
    fn scored(&self) {}
    fn finish(&self) {}
}

/// Selector tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Number of ranked guesses kept per round (at least 1)
    pub top_k: usize,
    /// Score candidates on the rayon pool
    pub parallel: bool,
}

impl SelectorConfig {
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            parallel: true,
        }
    }
}

/// Result of a round that still has candidates
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Highest-scoring guess
    pub best: ScoredWord<'a>,
    /// Top-K guesses, best first
    pub top: Vec<ScoredWord<'a>>,
    /// Answers still consistent with the clue
    pub possible_answers: usize,
    /// Unplayed guesses still consistent with the clue
    pub possible_guesses: usize,
}

impl<'a> Ranking<'a> {
    #[must_use]
    pub const fn word(&self) -> &'a Word {
        self.best.word
    }
}

/// Outcome of [`Selector::select_best_guess`]
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    Guess(Ranking<'a>),
    /// No guess in the vocabulary is consistent with the clue
    NoCandidates,
}

impl<'a> Selection<'a> {
    /// Best guess, if there is one
    #[must_use]
    pub fn word(&self) -> Option<&'a Word> {
        match self {
            Self::Guess(ranking) => Some(ranking.word()),
            Self::NoCandidates => None,
        }
    }

    #[must_use]
    pub const fn ranking(&self) -> Option<&Ranking<'a>> {
        match self {
            Self::Guess(ranking) => Some(ranking),
            Self::NoCandidates => None,
        }
    }
}

/// Chooses guesses for one game configuration
///
/// Owns the strategy and borrows the vocabularies, which are validated once
/// up front. Every selection after that is infallible.
pub struct Selector<'a, S: Scorer> {
    strategy: S,
    alphabet: &'a Alphabet,
    word_len: usize,
    answers: &'a [Word],
    guesses: &'a [Word],
    config: SelectorConfig,
}

impl<'a, S: Scorer> Selector<'a, S> {
    /// Create a selector
    ///
    /// # Parameters
    /// - `strategy`: how guesses are scored
    /// - `alphabet`: symbols words may use
    /// - `word_len`: length of every word in the game
    /// - `answers`: words that can be the secret
    /// - `guesses`: words allowed as input
    ///
    /// # Errors
    /// Fails on the first vocabulary word that is the wrong length or leaves
    /// the alphabet, and on a word length outside `1..=20`.
    pub fn new(
        strategy: S,
        alphabet: &'a Alphabet,
        word_len: usize,
        answers: &'a [Word],
        guesses: &'a [Word],
    ) -> Result<Self, ClueError> {
        if word_len == 0 || word_len > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(word_len).into());
        }

        for word in answers.iter().chain(guesses) {
            if word.len() != word_len {
                return Err(ClueError::LengthMismatch {
                    expected: word_len,
                    actual: word.len(),
                });
            }
            alphabet.validate(word)?;
        }

        debug!(
            "selector ready: {} answers, {} guesses, length {word_len}",
            answers.len(),
            guesses.len()
        );

        Ok(Self {
            strategy,
            alphabet,
            word_len,
            answers,
            guesses,
            config: SelectorConfig::default(),
        })
    }

    /// Replace the configuration; `top_k` is raised to at least 1
    #[must_use]
    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config.with_top_k(config.top_k.max(1));
        self
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answers
    }

    #[must_use]
    pub const fn guesses(&self) -> &'a [Word] {
        self.guesses
    }

    #[must_use]
    pub const fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Clue for a game where nothing is known yet
    #[must_use]
    pub fn initial_clue(&self) -> Clue {
        Clue::new(self.alphabet, self.word_len)
    }

    /// Scoring context for `clue` over this selector's vocabularies
    #[must_use]
    pub fn context(&self, clue: &Clue, game_progress: f64) -> ScoringContext<'a> {
        ScoringContext::new(
            self.alphabet,
            clue.clone(),
            self.answers,
            self.guesses,
            game_progress,
        )
    }

    /// Best guess given everything learned so far
    ///
    /// A clue of a different length than the selector's matches nothing and
    /// yields `NoCandidates`.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{Alphabet, Word};
    /// use wordle_clues::solver::{Selection, Selector, StrategyType};
    ///
    /// let alphabet = Alphabet::lowercase();
    /// let words: Vec<Word> = ["crate", "grate", "cigar"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let selector = Selector::new(StrategyType::default(), &alphabet, 5, &words, &words).unwrap();
    /// let selection = selector.select_best_guess(&selector.initial_clue(), 0.0);
    /// assert!(matches!(selection, Selection::Guess(_)));
    /// ```
    #[must_use]
    pub fn select_best_guess(&self, clue: &Clue, game_progress: f64) -> Selection<'a> {
        self.select_best_guess_with_progress(clue, game_progress, &())
    }

    /// Same as [`Selector::select_best_guess`], reporting each scored candidate
    #[must_use]
    pub fn select_best_guess_with_progress<P: Progress>(
        &self,
        clue: &Clue,
        game_progress: f64,
        progress: &P,
    ) -> Selection<'a> {
        self.select_best_unplayed(clue, game_progress, &[], progress)
    }

    /// Best guess that is not in `played`
    ///
    /// Feedback without an absent mark (an anagram of the answer, say) leaves
    /// the guessed word consistent with the clue, so game loops pass the words
    /// they already tried here. Yields `NoCandidates` once every consistent
    /// guess has been played.
    #[must_use]
    pub fn select_best_unplayed<P: Progress>(
        &self,
        clue: &Clue,
        game_progress: f64,
        played: &[&Word],
        progress: &P,
    ) -> Selection<'a> {
        let ctx = self.context(clue, game_progress);
        let candidates: Vec<&'a Word> = ctx
            .possible_guesses()
            .iter()
            .copied()
            .filter(|word| !played.contains(word))
            .collect();

        debug!(
            "scoring {} guesses against {} possible answers with {}",
            candidates.len(),
            ctx.possible_answers().len(),
            self.strategy.name()
        );

        if candidates.is_empty() {
            return Selection::NoCandidates;
        }

        progress.start(candidates.len());
        let score = |word: &Word| {
            let s = self.strategy.score(word, &ctx);
            progress.scored();
            s
        };
        let scores: Vec<f64> = if self.config.parallel {
            candidates.par_iter().map(|&w| score(w)).collect()
        } else {
            candidates.iter().map(|&w| score(w)).collect()
        };
        progress.finish();

        // Merge in vocabulary order so ties favor earlier words
        let mut top = TopK::new(self.config.top_k);
        for (&word, &s) in candidates.iter().zip(&scores) {
            top.offer(word, s);
        }

        for entry in top.entries() {
            trace!("  {} {:.6}", entry.word, entry.score);
        }

        let top = top.into_vec();
        match top.first().copied() {
            Some(best) => Selection::Guess(Ranking {
                best,
                top,
                possible_answers: ctx.possible_answers().len(),
                possible_guesses: candidates.len(),
            }),
            None => Selection::NoCandidates,
        }
    }
}
