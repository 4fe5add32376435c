//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, describe_clue};
use crate::commands::{AnalysisResult, BenchmarkResult, GameEnd, GameResult};
use crate::core::Alphabet;
use crate::solver::{Progress, Ranking, ScoredWord};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar in the house style
#[must_use]
pub fn progress_bar(len: usize, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar
}

impl Progress for ProgressBar {
    fn start(&self, total: usize) {
        self.reset();
        self.set_length(total as u64);
    }

    fn scored(&self) {
        self.inc(1);
    }

    fn finish(&self) {
        self.finish_and_clear();
    }
}

/// Top-K lines, best first
pub fn print_top(top: &[ScoredWord<'_>]) {
    for (i, entry) in top.iter().enumerate() {
        let line = format!(
            "   {}. {} {:.6}",
            i + 1,
            entry.word.text().to_uppercase(),
            entry.score
        );
        if i == 0 {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }
}

/// Suggested guess with its ranking
pub fn print_ranking(ranking: &Ranking<'_>) {
    println!(
        "\n📊 Suggested guess: {}",
        ranking.word().text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "   {} possible answers, {} possible guesses",
        ranking.possible_answers, ranking.possible_guesses
    );
    print_top(&ranking.top);
}

/// Print the result of simulating a game
///
/// Verbose output adds the candidate counts, the ranking and the known
/// constraints for every round.
pub fn print_game_result(result: &GameResult<'_>, alphabet: &Alphabet, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Answer: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_tiles(step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Possible answers: {}", step.possible_answers);
            print_top(&step.top);
            println!("  Known: {}", describe_clue(&step.clue, alphabet));
        }
    }

    println!();
    match result.end {
        GameEnd::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.rounds())
                .green()
                .bold()
        ),
        GameEnd::OutOfRounds => println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.rounds())
                .red()
                .bold()
        ),
        GameEnd::NoCandidates => println!(
            "{}",
            "❌ No guess in the vocabulary fits the clues".red().bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 As an opener against {} answers:", result.total_answers);
    for (name, score) in &result.scores {
        let bar = create_progress_bar(*score, 1.0, 30);
        println!(
            "   {name:<8} [{}] {}",
            bar.green(),
            format!("{score:.4}").bright_yellow()
        );
    }
    println!(
        "   Expected:    {:.1} guesses remain",
        result.expected_next
    );

    if !result.in_guesses {
        println!("\n{}", "⚠ Not in the guess list".yellow());
    }
    if result.in_answers {
        println!("{}", "✓ Can be the answer".green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if let Some(opening) = &result.opening {
        println!("   Opening:          {}", opening.to_uppercase());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = ((pct / 2.5) as usize).min(40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
        println!("   {guesses}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Failed words:".red().bold());
        for word in result.failed_words.iter().take(20) {
            println!("   {}", word.to_uppercase());
        }
        if result.failed_words.len() > 20 {
            println!("   ... and {} more", result.failed_words.len() - 20);
        }
    }
}
