//! Local adequacy scoring
//!
//! Prefers guesses whose letters are common at their own positions among the
//! remaining answers. Cheap and position-sensitive; says nothing about
//! duplicate letters.

use super::context::ScoringContext;
use super::strategy::Scorer;
use crate::core::Word;

/// Symbol counts per position over the possible answers
pub(crate) struct PositionFrequencies {
    counts: Vec<[u32; 128]>,
}

impl PositionFrequencies {
    pub(crate) fn build(possible_answers: &[&Word], len: usize) -> Self {
        let mut counts = vec![[0u32; 128]; len];
        for answer in possible_answers {
            for (table, &ch) in counts.iter_mut().zip(answer.chars()) {
                table[usize::from(ch)] += 1;
            }
        }
        Self { counts }
    }

    /// Answers holding `symbol` at `position`
    #[inline]
    pub(crate) fn count(&self, position: usize, symbol: u8) -> u32 {
        self.counts
            .get(position)
            .map_or(0, |table| table[usize::from(symbol) & 0x7f])
    }
}

/// Sum of per-position frequencies, normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdequacy;

impl Scorer for LocalAdequacy {
    fn name(&self) -> &'static str {
        "local"
    }

    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
        let total = ctx.possible_answers().len();
        if total == 0 {
            return 0.0;
        }

        let frequencies = ctx.position_frequencies();
        let sum: u32 = candidate
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &ch)| frequencies.count(i, ch))
            .sum();

        f64::from(sum) / (total * ctx.word_len()) as f64
    }
}
