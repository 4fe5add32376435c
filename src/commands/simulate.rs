//! Game simulation command
//!
//! Plays one game against a known answer and records every round.

use crate::clue::Clue;
use crate::core::{Alphabet, ClueError, Feedback, Word};
use crate::solver::{Progress, ScoredWord, Scorer, Selection, Selector};
use log::{debug, info};

/// Configuration for simulating a game
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub answer: Word,
    pub max_rounds: usize,
}

impl SimulateConfig {
    /// Six rounds against `answer`
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            answer,
            max_rounds: 6,
        }
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

/// One played round
#[derive(Debug, Clone)]
pub struct GameStep<'a> {
    pub guess: &'a Word,
    pub feedback: Feedback,
    /// Answers still possible before this guess
    pub possible_answers: usize,
    /// Ranking the guess was picked from
    pub top: Vec<ScoredWord<'a>>,
    /// Everything known after this round's feedback
    pub clue: Clue,
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Solved,
    OutOfRounds,
    /// The clue ruled out every guess
    NoCandidates,
}

/// Result of simulating a game
#[derive(Debug, Clone)]
pub struct GameResult<'a> {
    pub answer: Word,
    pub steps: Vec<GameStep<'a>>,
    pub end: GameEnd,
}

impl GameResult<'_> {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.end == GameEnd::Solved
    }

    /// Number of guesses played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// Play one game with `selector` against `config.answer`
///
/// Each round asks the selector for a guess, evaluates it against the answer
/// and folds the resulting clue into what is known. A word is never played
/// twice. The game ends on an all-correct feedback, when the selector has no
/// unplayed candidates left, or after `max_rounds` guesses.
///
/// # Errors
///
/// Returns an error if the answer is the wrong length or uses symbols
/// outside the selector's alphabet.
pub fn simulate_game<'a, S: Scorer, P: Progress>(
    selector: &Selector<'a, S>,
    config: &SimulateConfig,
    progress: &P,
) -> Result<GameResult<'a>, ClueError> {
    let alphabet = selector.alphabet();
    let answer = &config.answer;
    if answer.len() != selector.word_len() {
        return Err(ClueError::LengthMismatch {
            expected: selector.word_len(),
            actual: answer.len(),
        });
    }
    alphabet.validate(answer)?;

    let mut clue = selector.initial_clue();
    let mut steps = Vec::new();
    let mut played: Vec<&'a Word> = Vec::new();
    let mut end = GameEnd::OutOfRounds;

    for round in 0..config.max_rounds {
        let game_progress = round as f64 / config.max_rounds as f64;
        let selection = selector.select_best_unplayed(&clue, game_progress, &played, progress);
        let ranking = match selection {
            Selection::Guess(ranking) => ranking,
            Selection::NoCandidates => {
                info!("round {}: no candidates left for {answer}", round + 1);
                end = GameEnd::NoCandidates;
                break;
            }
        };

        let guess = ranking.word();
        let feedback = Feedback::evaluate(alphabet, guess, answer)?;
        debug!(
            "round {}: {guess} -> {feedback} ({} possible answers)",
            round + 1,
            ranking.possible_answers
        );

        let solved = feedback.is_perfect();
        clue = update_clue(&clue, alphabet, guess, &feedback)?;
        played.push(guess);
        steps.push(GameStep {
            guess,
            feedback,
            possible_answers: ranking.possible_answers,
            top: ranking.top,
            clue: clue.clone(),
        });

        if solved {
            end = GameEnd::Solved;
            break;
        }
    }

    info!("{answer}: {:?} after {} guesses", end, steps.len());

    Ok(GameResult {
        answer: answer.clone(),
        steps,
        end,
    })
}

/// Fold one round of feedback into the running clue
pub(crate) fn update_clue(
    clue: &Clue,
    alphabet: &Alphabet,
    guess: &Word,
    feedback: &Feedback,
) -> Result<Clue, ClueError> {
    clue.combine(&Clue::from_feedback(alphabet, guess, feedback)?)
}
