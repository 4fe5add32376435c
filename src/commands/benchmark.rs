//! Benchmark command
//!
//! Plays a full game against every given answer and collects statistics.

use super::simulate::{SimulateConfig, simulate_game};
use crate::core::{ClueError, Word};
use crate::solver::{Progress, Scorer, Selector};
use log::info;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses needed → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Answers that were not solved in time
    pub failed_words: Vec<String>,
    /// Opening guess, if every game used the same one
    pub opening: Option<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of answers
///
/// # Errors
///
/// Returns an error if an answer does not fit the selector's alphabet or
/// word length.
pub fn run_benchmark<S: Scorer>(
    selector: &Selector<'_, S>,
    answers: &[Word],
    max_rounds: usize,
) -> Result<BenchmarkResult, ClueError> {
    run_benchmark_with_progress(selector, answers, max_rounds, &())
}

/// Same as [`run_benchmark`], reporting each finished game to `progress`
///
/// # Errors
///
/// Returns an error if an answer does not fit the selector's alphabet or
/// word length.
pub fn run_benchmark_with_progress<S: Scorer, P: Progress>(
    selector: &Selector<'_, S>,
    answers: &[Word],
    max_rounds: usize,
    progress: &P,
) -> Result<BenchmarkResult, ClueError> {
    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed_words = Vec::new();
    let mut openings: Vec<String> = Vec::new();

    progress.start(answers.len());
    for answer in answers {
        let config = SimulateConfig::new(answer.clone()).with_max_rounds(max_rounds);
        let game = simulate_game(selector, &config, &())?;

        if let Some(first) = game.steps.first() {
            let text = first.guess.text();
            if !openings.iter().any(|o| o == text) {
                openings.push(text.to_string());
            }
        }

        if game.solved() {
            *distribution.entry(game.rounds()).or_insert(0) += 1;
        } else {
            failed_words.push(answer.text().to_string());
        }
        progress.scored();
    }
    progress.finish();

    let duration = start.elapsed();
    let total_words = answers.len();
    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let result = BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        average_guesses,
        failed_words,
        opening: if openings.len() == 1 { openings.pop() } else { None },
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    };

    info!(
        "benchmark: {}/{} solved, average {:.3}",
        result.solved, result.total_words, result.average_guesses
    );

    Ok(result)
}
