//! Word analysis command
//!
//! Scores one word as an opening guess under every built-in strategy.

use crate::core::{ClueError, Word};
use crate::solver::{Scorer, Selector, StrategyType, expected_next_candidates};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    /// Whether the word is in the guess vocabulary
    pub in_guesses: bool,
    /// Whether the word can be the answer
    pub in_answers: bool,
    pub total_answers: usize,
    /// Guesses expected to remain after playing the word
    pub expected_next: f64,
    /// Strategy name → score, in `StrategyType::NAMES` order
    pub scores: Vec<(&'static str, f64)>,
}

/// Analyze `word` as the first guess of a game
///
/// The word does not have to be in the vocabulary, only valid for the
/// selector's alphabet and length.
///
/// # Errors
///
/// Returns an error if the word is malformed, the wrong length, or uses
/// symbols outside the alphabet.
pub fn analyze_word<S: Scorer>(
    selector: &Selector<'_, S>,
    word: &str,
) -> Result<AnalysisResult, ClueError> {
    let word = selector.alphabet().parse_word(word)?;
    if word.len() != selector.word_len() {
        return Err(ClueError::LengthMismatch {
            expected: selector.word_len(),
            actual: word.len(),
        });
    }

    let ctx = selector.context(&selector.initial_clue(), 0.0);
    let scores = StrategyType::all()
        .iter()
        .map(|strategy| (strategy.name(), strategy.score(&word, &ctx)))
        .collect();

    let contains = |list: &[Word]| list.iter().any(|w| w == &word);

    Ok(AnalysisResult {
        word: word.text().to_string(),
        in_guesses: contains(selector.guesses()),
        in_answers: contains(selector.answers()),
        total_answers: ctx.possible_answers().len(),
        expected_next: expected_next_candidates(&word, &ctx),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::wordlists::words_from_slice;

    fn vocab() -> Vec<Word> {
        words_from_slice(&["crate", "grate", "irate"])
    }

    #[test]
    fn analyze_valid_word() {
        let alphabet = Alphabet::lowercase();
        let words = vocab();
        let selector =
            Selector::new(StrategyType::default(), &alphabet, 5, &words, &words).unwrap();

        let result = analyze_word(&selector, "CRATE").unwrap();

        assert_eq!(result.word, "crate");
        assert!(result.in_guesses);
        assert!(result.in_answers);
        assert_eq!(result.total_answers, 3);
        assert!((result.expected_next - 5.0 / 3.0).abs() < 1e-12);

        let names: Vec<&str> = result.scores.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, StrategyType::NAMES);

        let score = |name: &str| result.scores.iter().find(|(n, _)| *n == name).unwrap().1;
        assert!((score("local") - 13.0 / 15.0).abs() < 1e-12);
        assert!((score("fewest") - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn word_outside_vocabulary_still_scored() {
        let alphabet = Alphabet::lowercase();
        let words = vocab();
        let selector =
            Selector::new(StrategyType::default(), &alphabet, 5, &words, &words).unwrap();

        let result = analyze_word(&selector, "zzzzz").unwrap();

        assert!(!result.in_guesses);
        assert!(result.scores.iter().all(|(_, s)| s.abs() < 1e-12));
    }

    #[test]
    fn invalid_words_rejected() {
        let alphabet = Alphabet::lowercase();
        let words = vocab();
        let selector =
            Selector::new(StrategyType::default(), &alphabet, 5, &words, &words).unwrap();

        assert!(matches!(
            analyze_word(&selector, "crates"),
            Err(ClueError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
        assert!(matches!(
            analyze_word(&selector, "cr4te"),
            Err(ClueError::InvalidSymbol { position: 2, .. })
        ));
        assert!(matches!(analyze_word(&selector, ""), Err(ClueError::Word(_))));
    }
}
