//! Intersecting clues

use super::Clue;
use crate::core::ClueError;

impl Clue {
    /// Combine two clues into the tightest clue implied by both
    ///
    /// Position sets are intersected. Count ranges are merged per symbol,
    /// taking the larger minimum and the smaller maximum. A symbol known to
    /// only one side passes through unchanged. The result does not depend on
    /// argument order or grouping.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the clues cover different word
    /// lengths.
    pub fn combine(&self, other: &Self) -> Result<Self, ClueError> {
        if self.len() != other.len() {
            return Err(ClueError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        Ok(self.intersect(other))
    }

    /// Unchecked combination for clues of equal length
    pub(crate) fn intersect(&self, other: &Self) -> Self {
        let possible_chars = self
            .possible_chars
            .iter()
            .zip(&other.possible_chars)
            .map(|(&a, &b)| a.intersection(b))
            .collect();

        let mut included_chars = self.included_chars.clone();
        for (&symbol, &range) in &other.included_chars {
            included_chars
                .entry(symbol)
                .and_modify(|r| *r = r.tighten(range))
                .or_insert(range);
        }

        Self {
            possible_chars,
            included_chars,
        }
    }
}
