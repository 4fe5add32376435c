//! Fewest expected next candidates
//!
//! Simulates every possible answer: the feedback it would produce, the clue
//! that feedback implies on top of what is already known, and how many
//! guesses would survive it. Slow but looks one full round ahead.

use super::context::ScoringContext;
use super::strategy::Scorer;
use crate::clue::Clue;
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Average number of possible guesses left after playing `candidate`
///
/// Each possible answer is weighted equally. Answers producing the same
/// feedback pattern share one clue derivation.
///
/// Returns 0.0 when no answers remain.
#[must_use]
pub fn expected_next_candidates(candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
    let answers = ctx.possible_answers();
    if answers.is_empty() {
        return 0.0;
    }

    // Remaining-guess count per feedback code
    let mut remaining: FxHashMap<u32, usize> = FxHashMap::default();
    let mut sum = 0usize;

    for &answer in answers {
        let code = Feedback::calculate_code(candidate, answer);
        let count = *remaining.entry(code).or_insert_with(|| {
            let feedback = Feedback::from_code(code, candidate.len());
            let next = ctx
                .clue()
                .intersect(&Clue::derive(ctx.alphabet(), candidate, &feedback));
            ctx.possible_guesses()
                .iter()
                .filter(|w| next.matches(w))
                .count()
        });
        sum += count;
    }

    sum as f64 / answers.len() as f64
}

/// Scores `1 - E[next] / |PA|`
///
/// The expectation is already an average over the possible answers, so the
/// score divides by their count twice. Larger answer sets push every score
/// toward 1; only the ordering within a round is meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestNextCandidates;

impl Scorer for FewestNextCandidates {
    fn name(&self) -> &'static str {
        "fewest"
    }

    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
        let total = ctx.possible_answers().len();
        if total == 0 {
            return 0.0;
        }

        1.0 - expected_next_candidates(candidate, ctx) / total as f64
    }
}
