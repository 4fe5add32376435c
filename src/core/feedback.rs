//! Wordle feedback calculation and representation
//!
//! Feedback is one [`Outcome`] per position. For caching it also has a
//! compact base-3 code:
//! - 0 = Absent (gray)
//! - 1 = Present (yellow)
//! - 2 = Correct (green)
//!
//! Position `i` contributes `digit × 3^i` to the code, so a 20-letter word
//! still fits in a `u32`.

use super::{Alphabet, ClueError, FeedbackError, MAX_WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Letter not in the answer, or all its occurrences already accounted for
    Absent,
    /// Letter in the answer but not at this position
    Present,
    /// Letter at exactly this position
    Correct,
}

impl Outcome {
    #[inline]
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji tile for this outcome
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback mark
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and
    /// '-'/'_'/'.'/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The full feedback for a guess, one outcome per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    outcomes: Vec<Outcome>,
}

/// Evaluate `guess` against `answer`
///
/// Shorthand for [`Feedback::evaluate`].
///
/// # Errors
/// See [`Feedback::evaluate`].
pub fn evaluate(alphabet: &Alphabet, guess: &Word, answer: &Word) -> Result<Feedback, ClueError> {
    Feedback::evaluate(alphabet, guess, answer)
}

impl Feedback {
    /// Create feedback from explicit outcomes
    #[must_use]
    pub const fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// All-correct feedback of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::new(vec![Outcome::Correct; len])
    }

    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.outcomes.iter().all(|&o| o == Outcome::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|&&o| o == Outcome::Correct)
            .count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|&&o| o == Outcome::Present)
            .count()
    }

    /// Base-3 code of this feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::Feedback;
    ///
    /// // G=2, Y=1, G=2, -=0, -=0
    /// // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
    /// let feedback: Feedback = "GYG--".parse().unwrap();
    /// assert_eq!(feedback.code(), 23);
    /// ```
    #[must_use]
    pub fn code(&self) -> u32 {
        encode(&self.outcomes)
    }

    /// Decode a base-3 code produced for a word of length `len`
    #[must_use]
    pub fn from_code(mut code: u32, len: usize) -> Self {
        let mut outcomes = Vec::with_capacity(len);
        for _ in 0..len {
            outcomes.push(Outcome::from_digit(code % 3));
            code /= 3;
        }
        Self::new(outcomes)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (correct) and remove them from the available pool
    /// 2. Second pass: Mark present-but-misplaced letters while the pool still holds them
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the words differ in length and
    /// `ClueError::InvalidSymbol` if either word leaves the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{Alphabet, Feedback, Outcome, Word};
    ///
    /// let alphabet = Alphabet::lowercase();
    /// let guess = Word::new("aaaab").unwrap();
    /// let answer = Word::new("xxxxa").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&alphabet, &guess, &answer).unwrap();
    /// assert_eq!(feedback.outcomes()[0], Outcome::Present);
    /// assert_eq!(feedback.count_present(), 1);
    /// ```
    pub fn evaluate(alphabet: &Alphabet, guess: &Word, answer: &Word) -> Result<Self, ClueError> {
        if guess.len() != answer.len() {
            return Err(ClueError::LengthMismatch {
                expected: answer.len(),
                actual: guess.len(),
            });
        }
        alphabet.validate(guess)?;
        alphabet.validate(answer)?;

        Ok(Self::calculate(guess, answer))
    }

    /// Unchecked evaluation for words already validated against one alphabet
    /// and length.
    #[must_use]
    pub(crate) fn calculate(guess: &Word, answer: &Word) -> Self {
        Self::new(mark(guess, answer)[..guess.len()].to_vec())
    }

    /// Unchecked evaluation straight to the base-3 code
    #[inline]
    #[must_use]
    pub(crate) fn calculate_code(guess: &Word, answer: &Word) -> u32 {
        encode(&mark(guess, answer)[..guess.len()])
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.outcomes.iter().map(|o| o.to_emoji()).collect()
    }
}

/// Two-pass marking shared by the checked and unchecked evaluators
fn mark(guess: &Word, answer: &Word) -> [Outcome; MAX_WORD_LEN] {
    let mut result = [Outcome::Absent; MAX_WORD_LEN];
    let mut answer_available = answer.symbol_counts();

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = Outcome::Correct;
            answer_available[usize::from(g)] -= 1;
        }
    }

    // Second pass: right letter, wrong position, while copies remain
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] != Outcome::Correct {
            let count = &mut answer_available[usize::from(g)];
            if *count > 0 {
                result[i] = Outcome::Present;
                *count -= 1;
            }
        }
    }

    result
}

fn encode(outcomes: &[Outcome]) -> u32 {
    outcomes
        .iter()
        .rev()
        .fold(0, |code, outcome| code * 3 + outcome.digit())
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let outcomes = s
            .trim()
            .chars()
            .map(|c| Outcome::from_char(c).ok_or(FeedbackError::InvalidMark(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if outcomes.is_empty() {
            return Err(FeedbackError::Empty);
        }
        if outcomes.len() > MAX_WORD_LEN {
            return Err(FeedbackError::TooLong(outcomes.len()));
        }

        Ok(Self::new(outcomes))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let mark = match outcome {
                Outcome::Correct => 'G',
                Outcome::Present => 'Y',
                Outcome::Absent => '-',
            };
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Outcome::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn check(guess: &str, answer: &str) -> Vec<Outcome> {
        let alphabet = Alphabet::lowercase();
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        evaluate(&alphabet, &guess, &answer)
            .unwrap()
            .outcomes()
            .to_vec()
    }

    #[test]
    fn exact_match_all_correct() {
        assert_eq!(check("abcde", "abcde"), vec![Correct; 5]);
    }

    #[test]
    fn disjoint_all_absent() {
        assert_eq!(check("xxxxx", "abcde"), vec![Absent; 5]);
    }

    #[test]
    fn single_copy_credited_to_first_occurrence() {
        assert_eq!(
            check("aaaab", "xxxxa"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn two_copies_credited_left_to_right() {
        assert_eq!(
            check("aaabb", "xxxaa"),
            vec![Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn correct_positions_consume_before_present() {
        assert_eq!(
            check("baaab", "aaaab"),
            vec![Absent, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR
        // First O is yellow (wrong position), second O is green (correct position)
        assert_eq!(
            check("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: ERASE has two E's, neither aligned
        assert_eq!(
            check("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn other_word_lengths() {
        assert_eq!(check("abc", "cab"), vec![Present; 3]);
        assert_eq!(check("ab", "ab"), vec![Correct; 2]);
    }

    #[test]
    fn evaluate_rejects_invalid_symbol() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let guess = Word::new("abcdz").unwrap();
        let answer = Word::new("abcde").unwrap();

        assert!(matches!(
            evaluate(&alphabet, &guess, &answer),
            Err(ClueError::InvalidSymbol { position: 4, symbol: 'z', .. })
        ));
        assert!(matches!(
            evaluate(&alphabet, &answer, &guess),
            Err(ClueError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        let alphabet = Alphabet::lowercase();
        let guess = Word::new("abcd").unwrap();
        let answer = Word::new("abcde").unwrap();

        assert_eq!(
            evaluate(&alphabet, &guess, &answer),
            Err(ClueError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn code_round_trip_and_values() {
        // C(gray) R(gray) A(green) N(gray) E(green) for CRANE vs SLATE
        // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
        let feedback = Feedback::new(vec![Absent, Absent, Correct, Absent, Correct]);
        assert_eq!(feedback.code(), 180);
        assert_eq!(Feedback::from_code(180, 5), feedback);
        assert_eq!(Feedback::perfect(5).code(), 242);
    }

    #[test]
    fn calculate_code_matches_feedback() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("slate").unwrap();
        assert_eq!(
            Feedback::calculate_code(&guess, &answer),
            Feedback::calculate(&guess, &answer).code()
        );
    }

    #[test]
    fn parse_valid() {
        let f1: Feedback = "GYG--".parse().unwrap();
        let f2: Feedback = "🟩🟨🟩⬜⬜".parse().unwrap();
        let f3: Feedback = "gyg__".parse().unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.count_correct(), 2);
        assert_eq!(f1.count_present(), 1);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!("GXG".parse::<Feedback>(), Err(FeedbackError::InvalidMark('X')));
        assert_eq!("".parse::<Feedback>(), Err(FeedbackError::Empty));
        assert!(matches!(
            "G".repeat(MAX_WORD_LEN + 1).parse::<Feedback>(),
            Err(FeedbackError::TooLong(_))
        ));
    }

    #[test]
    fn display_and_emoji() {
        let feedback: Feedback = "GY-".parse().unwrap();
        assert_eq!(feedback.to_string(), "GY-");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn perfect_feedback() {
        assert!(Feedback::perfect(5).is_perfect());
        assert!(!"GGGG-".parse::<Feedback>().unwrap().is_perfect());
    }

    proptest! {
        #[test]
        fn word_against_itself_is_perfect(w in "[a-e]{5}") {
            let word = Word::new(w).unwrap();
            prop_assert!(Feedback::calculate(&word, &word).is_perfect());
        }

        #[test]
        fn correct_count_equals_aligned_positions(g in "[a-e]{5}", a in "[a-e]{5}") {
            let guess = Word::new(g).unwrap();
            let answer = Word::new(a).unwrap();
            let aligned = guess
                .chars()
                .iter()
                .zip(answer.chars())
                .filter(|(x, y)| x == y)
                .count();
            prop_assert!(Feedback::calculate(&guess, &answer).count_correct() <= aligned);
        }

        #[test]
        fn credited_copies_never_exceed_answer(g in "[a-e]{5}", a in "[a-e]{5}") {
            let guess = Word::new(g).unwrap();
            let answer = Word::new(a).unwrap();
            let feedback = Feedback::calculate(&guess, &answer);

            for symbol in b'a'..=b'e' {
                let credited = guess
                    .chars()
                    .iter()
                    .zip(feedback.outcomes())
                    .filter(|&(&ch, &o)| ch == symbol && o != Outcome::Absent)
                    .count();
                prop_assert!(credited <= answer.count_of(symbol));
            }
        }
    }
}
