//! Global adequacy scoring
//!
//! Ignores positions and looks at how often letters occur anywhere in the
//! remaining answers. The n-th copy of a letter in a guess is only worth as
//! much as the answers holding at least n copies, so guesses stuffed with
//! one common letter are not over-rewarded.

use super::context::ScoringContext;
use super::strategy::Scorer;
use crate::core::Word;

/// `at_least(c, n)` = number of possible answers with `n` or more copies of `c`
pub(crate) struct OccurrenceHistogram {
    len: usize,
    // 128 rows of `len` columns; column n-1 holds the "at least n" count
    counts: Vec<u32>,
}

impl OccurrenceHistogram {
    pub(crate) fn build(possible_answers: &[&Word], len: usize) -> Self {
        let mut counts = vec![0u32; 128 * len];
        for answer in possible_answers {
            let symbols = answer.symbol_counts();
            for (symbol, &copies) in symbols.iter().enumerate() {
                let row = &mut counts[symbol * len..(symbol + 1) * len];
                for cell in row.iter_mut().take(usize::from(copies)) {
                    *cell += 1;
                }
            }
        }
        Self { len, counts }
    }

    #[inline]
    pub(crate) fn at_least(&self, symbol: u8, n: usize) -> u32 {
        if n == 0 || n > self.len {
            return 0;
        }
        self.counts[usize::from(symbol & 0x7f) * self.len + n - 1]
    }
}

/// Occurrence-aware letter frequency, normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAdequacy;

impl Scorer for GlobalAdequacy {
    fn name(&self) -> &'static str {
        "global"
    }

    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
        let total = ctx.possible_answers().len();
        if total == 0 {
            return 0.0;
        }

        let histogram = ctx.occurrence_histogram();
        let mut seen = [0usize; 128];
        let sum: u32 = candidate
            .chars()
            .iter()
            .map(|&ch| {
                let occurrence = &mut seen[usize::from(ch)];
                *occurrence += 1;
                histogram.at_least(ch, *occurrence)
            })
            .sum();

        f64::from(sum) / (total * ctx.word_len()) as f64
    }
}
