//! Turning one round of feedback into a standalone clue

use super::{Clue, CountRange};
use crate::core::{Alphabet, CharSet, ClueError, Feedback, Outcome, SymbolCounts, Word};

impl Clue {
    /// Derive the clue implied by a single guess and its feedback
    ///
    /// - A correct position is pinned to the guessed symbol.
    /// - Every other position excludes symbols that were only ever marked
    ///   absent in this guess. A symbol that is also correct or present
    ///   elsewhere in the guess stays allowed.
    /// - Each symbol credited `k` times gets the range `[k, k]` when one of
    ///   its copies was marked absent, and `[k, len]` otherwise.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the feedback does not cover the
    /// guess exactly, and `ClueError::InvalidSymbol` if the guess leaves the
    /// alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::clue::{Clue, CountRange};
    /// use wordle_clues::core::{Alphabet, Feedback, Word};
    ///
    /// let alphabet = Alphabet::lowercase();
    /// let guess = Word::new("abcda").unwrap();
    /// let feedback: Feedback = "G---Y".parse().unwrap();
    ///
    /// let clue = Clue::from_feedback(&alphabet, &guess, &feedback).unwrap();
    /// assert_eq!(clue.possible_at(0).to_string(), "a");
    /// assert!(!clue.possible_at(1).contains(b'b'));
    /// assert_eq!(clue.included(b'a'), Some(CountRange::new(2, 5)));
    /// ```
    pub fn from_feedback(
        alphabet: &Alphabet,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Self, ClueError> {
        if guess.len() != feedback.len() {
            return Err(ClueError::LengthMismatch {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        alphabet.validate(guess)?;

        Ok(Self::derive(alphabet, guess, feedback))
    }

    /// Unchecked derivation for a validated guess of matching length
    pub(crate) fn derive(alphabet: &Alphabet, guess: &Word, feedback: &Feedback) -> Self {
        let len = guess.len();
        let marks = || guess.chars().iter().copied().zip(feedback.outcomes().iter().copied());

        let mut credited: SymbolCounts = [0; 128];
        let mut absent = CharSet::EMPTY;
        for (symbol, outcome) in marks() {
            match outcome {
                Outcome::Absent => absent = absent.with(symbol),
                Outcome::Present | Outcome::Correct => credited[usize::from(symbol)] += 1,
            }
        }

        let excluded: CharSet = absent
            .iter()
            .filter(|&symbol| credited[usize::from(symbol)] == 0)
            .collect();
        let open = alphabet.symbols().difference(excluded);

        let possible_chars = marks()
            .map(|(symbol, outcome)| match outcome {
                Outcome::Correct => CharSet::singleton(symbol),
                Outcome::Present | Outcome::Absent => open,
            })
            .collect();

        let included_chars = (0u8..128).filter_map(|symbol| {
            let k = credited[usize::from(symbol)];
            if k == 0 {
                return None;
            }
            let max = if absent.contains(symbol) { k } else { len as u8 };
            Some((symbol, CountRange::new(k, max)))
        });

        Self::from_parts(possible_chars, included_chars)
    }
}
