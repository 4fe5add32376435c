//! Checking words against a clue

use super::Clue;
use crate::core::Word;

impl Clue {
    /// Check whether `word` is consistent with everything this clue knows
    ///
    /// A word of the wrong length never matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::clue::Clue;
    /// use wordle_clues::core::{Alphabet, Feedback, Word};
    ///
    /// let alphabet = Alphabet::lowercase();
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&alphabet, &guess, &answer).unwrap();
    ///
    /// let clue = Clue::from_feedback(&alphabet, &guess, &feedback).unwrap();
    /// assert!(clue.matches(&answer));
    /// assert!(!clue.matches(&guess));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.len() {
            return false;
        }

        if !word
            .chars()
            .iter()
            .zip(&self.possible_chars)
            .all(|(&ch, set)| set.contains(ch))
        {
            return false;
        }

        if self.included_chars.is_empty() {
            return true;
        }

        let counts = word.symbol_counts();
        self.included_chars
            .iter()
            .all(|(&symbol, range)| range.contains(usize::from(counts[usize::from(symbol)])))
    }

    /// Keep the words consistent with this clue, in their original order
    #[must_use]
    pub fn filter<'a>(&self, words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a Word> {
        words.into_iter().filter(|w| self.matches(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::CountRange;
    use crate::core::{Alphabet, CharSet, Feedback};
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fresh_clue_matches_everything() {
        let clue = Clue::new(&Alphabet::lowercase(), 5);
        assert!(clue.matches(&word("crane")));
        assert!(clue.matches(&word("zzzzz")));
    }

    #[test]
    fn wrong_length_never_matches() {
        let clue = Clue::new(&Alphabet::lowercase(), 5);
        assert!(!clue.matches(&word("cran")));
        assert!(!clue.matches(&word("cranes")));
    }

    #[test]
    fn position_sets_enforced() {
        let clue = Clue::from_parts(
            vec![CharSet::singleton(b'a'), CharSet::from_bytes(b"bc")],
            [],
        );
        assert!(clue.matches(&word("ab")));
        assert!(clue.matches(&word("ac")));
        assert!(!clue.matches(&word("ba")));
        assert!(!clue.matches(&word("aa")));
    }

    #[test]
    fn count_ranges_enforced() {
        let all = Alphabet::lowercase().symbols();
        let clue = Clue::from_parts(vec![all; 5], [(b'e', CountRange::new(2, 2))]);

        assert!(!clue.matches(&word("geese")));
        assert!(clue.matches(&word("there")));
        assert!(!clue.matches(&word("crane")));
    }

    #[test]
    fn contradictory_range_matches_nothing() {
        let all = Alphabet::lowercase().symbols();
        let clue = Clue::from_parts(
            vec![all; 3],
            [(b'a', CountRange::new(2, 5)), (b'a', CountRange::new(0, 1))],
        );
        assert!(!clue.matches(&word("aab")));
        assert!(!clue.matches(&word("abc")));
        assert!(!clue.matches(&word("xyz")));
    }

    #[test]
    fn filter_preserves_order() {
        let words = vec![word("crane"), word("slate"), word("crate"), word("grate")];
        let clue = Clue::from_parts(
            vec![
                Alphabet::lowercase().symbols(),
                CharSet::singleton(b'r'),
                CharSet::singleton(b'a'),
                Alphabet::lowercase().symbols(),
                CharSet::singleton(b'e'),
            ],
            [],
        );

        let kept: Vec<&str> = clue.filter(&words).iter().map(|w| w.text()).collect();
        assert_eq!(kept, vec!["crane", "crate", "grate"]);
    }

    #[test]
    fn combined_history_narrows_candidates() {
        let alphabet = Alphabet::lowercase();
        let answer = word("grate");
        let mut clue = Clue::new(&alphabet, 5);

        for guess in ["crane", "irate"] {
            let guess = word(guess);
            let feedback = Feedback::evaluate(&alphabet, &guess, &answer).unwrap();
            let round = Clue::from_feedback(&alphabet, &guess, &feedback).unwrap();
            clue = clue.combine(&round).unwrap();
        }

        let words = vec![word("crate"), word("grate"), word("irate"), word("plate")];
        let kept: Vec<&str> = clue.filter(&words).iter().map(|w| w.text()).collect();
        assert_eq!(kept, vec!["grate"]);
    }

    proptest! {
        #[test]
        fn answer_matches_clue_from_its_feedback(g in "[a-e]{5}", a in "[a-e]{5}") {
            let alphabet = Alphabet::new("abcde").unwrap();
            let guess = word(&g);
            let answer = word(&a);
            let feedback = Feedback::evaluate(&alphabet, &guess, &answer).unwrap();
            let clue = Clue::from_feedback(&alphabet, &guess, &feedback).unwrap();

            prop_assert!(clue.matches(&answer));
        }

        #[test]
        fn word_matches_clue_from_perfect_feedback(w in "[a-e]{5}") {
            let alphabet = Alphabet::new("abcde").unwrap();
            let solved = word(&w);
            let feedback = Feedback::evaluate(&alphabet, &solved, &solved).unwrap();
            let clue = Clue::from_feedback(&alphabet, &solved, &feedback).unwrap();

            prop_assert!(clue.matches(&solved));
        }
    }
}
