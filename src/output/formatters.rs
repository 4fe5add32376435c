//! Formatting utilities for terminal output

use crate::clue::Clue;
use crate::core::{Alphabet, CharSet, Feedback, Outcome, Word};
use colored::Colorize;
use std::fmt::Write;

/// Letters of `guess` as colored tiles, like the game board
#[must_use]
pub fn colored_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.outcomes())
        .map(|(&ch, outcome)| {
            let tile = format!(" {} ", char::from(ch.to_ascii_uppercase()));
            match outcome {
                Outcome::Correct => tile.black().on_green().bold().to_string(),
                Outcome::Present => tile.black().on_yellow().bold().to_string(),
                Outcome::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-line summary of a clue
///
/// Pinned positions show their letter, open positions show `·`. Count
/// constraints follow as `a×[1, 5]`, then the letters ruled out entirely.
///
/// ```
/// use wordle_clues::clue::Clue;
/// use wordle_clues::core::{Alphabet, Word};
/// use wordle_clues::output::formatters::describe_clue;
///
/// let alphabet = Alphabet::lowercase();
/// let guess = Word::new("crane").unwrap();
/// let clue = Clue::from_feedback(&alphabet, &guess, &"--GYG".parse().unwrap()).unwrap();
///
/// assert_eq!(describe_clue(&clue, &alphabet), "··A·E  a×[1, 5] e×[1, 5] n×[1, 5]  not: cr");
/// ```
#[must_use]
pub fn describe_clue(clue: &Clue, alphabet: &Alphabet) -> String {
    let mut out: String = clue
        .possible_chars()
        .iter()
        .map(|set| match set.iter().next() {
            Some(symbol) if set.len() == 1 => char::from(symbol.to_ascii_uppercase()),
            _ => '·',
        })
        .collect();

    if !clue.included_chars().is_empty() {
        out.push(' ');
        for (&symbol, range) in clue.included_chars() {
            let _ = write!(out, " {}×{range}", char::from(symbol));
        }
    }

    let anywhere = clue
        .possible_chars()
        .iter()
        .fold(CharSet::EMPTY, |acc, &set| acc.union(set));
    let ruled_out = alphabet.symbols().difference(anywhere);
    if !ruled_out.is_empty() {
        let _ = write!(out, "  not: {ruled_out}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let feedback: Feedback = "G-Y--".parse().unwrap();

        assert_eq!(colored_tiles(&guess, &feedback), " C  R  A  N  E ");
    }

    #[test]
    fn fresh_clue_is_all_open() {
        let alphabet = Alphabet::lowercase();
        let clue = Clue::new(&alphabet, 5);
        assert_eq!(describe_clue(&clue, &alphabet), "·····");
    }
}
