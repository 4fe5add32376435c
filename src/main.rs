//! Wordle Clues - CLI
//!
//! Simulate, benchmark, analyze or play Wordle-style games over any word
//! list, alphabet and word length.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use wordle_clues::{
    commands::{
        SimulateConfig, analyze_word, run_benchmark_with_progress, run_play, simulate_game,
    },
    core::{Alphabet, DEFAULT_WORD_LEN, Word},
    output::{
        print_analysis_result, print_benchmark_result, print_game_result, print_ranking,
        progress_bar,
    },
    solver::{Selector, SelectorConfig, StrategyType},
    wordlists::{load_from_file, merge_vocabularies},
};

#[derive(Parser)]
#[command(
    name = "wordle_clues",
    about = "Wordle solver built on combinable clues and interchangeable scoring strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File with the possible answers, one per line (required)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// File with extra allowed guesses, one per line (answers are always allowed)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Strategy: fewest (default), local, global, blend
    #[arg(short, long, global = true, default_value = "fewest")]
    strategy: String,

    /// Number of ranked guesses to keep per round
    #[arg(short = 'k', long, global = true, default_value_t = 5)]
    top_k: usize,

    /// Symbols words may use
    #[arg(long, global = true, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,

    /// Word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LEN)]
    length: usize,

    /// Rounds per game
    #[arg(short, long, global = true, default_value_t = 6)]
    max_rounds: usize,

    /// Score candidates on one thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a known (or random) answer
    Simulate {
        /// The answer to play against; random if omitted
        answer: Option<String>,

        /// Show possible-answer counts and rankings per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive mode: get suggestions and enter the game's feedback
    Play,

    /// Score a word as an opening guess with every strategy
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every answer (or the first COUNT) and report statistics
    Benchmark {
        /// Number of answers to test
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let alphabet = Alphabet::new(&cli.alphabet)
        .with_context(|| format!("invalid alphabet {:?}", cli.alphabet))?;
    let Some(answers_path) = &cli.answers else {
        bail!("no answer list given; pass --answers <FILE>");
    };
    let answers = load_from_file(answers_path, &alphabet, cli.length)
        .with_context(|| format!("failed to load answers from {}", answers_path.display()))?;
    let guesses = match &cli.guesses {
        Some(path) => {
            let allowed = load_from_file(path, &alphabet, cli.length)
                .with_context(|| format!("failed to load guesses from {}", path.display()))?;
            merge_vocabularies(&allowed, &answers)
        }
        None => answers.clone(),
    };
    info!("{} answers, {} guesses", answers.len(), guesses.len());

    let Some(strategy) = StrategyType::from_name(&cli.strategy) else {
        bail!(
            "unknown strategy {:?}; expected one of {}",
            cli.strategy,
            StrategyType::NAMES.join(", ")
        );
    };

    let config = SelectorConfig::default()
        .with_top_k(cli.top_k)
        .with_parallel(!cli.sequential);
    let selector = Selector::new(strategy, &alphabet, cli.length, &answers, &guesses)
        .context("invalid vocabulary")?
        .with_config(config);

    match cli.command {
        Commands::Simulate { answer, verbose } => {
            simulate_command(&selector, answer.as_deref(), verbose, cli.max_rounds)
        }
        Commands::Play => {
            let stats = run_play(&selector, cli.max_rounds)?;
            info!("{} games, {} won", stats.games_started, stats.games_won);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&selector, &word)
                .with_context(|| format!("cannot analyze {word:?}"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => benchmark_command(&selector, count, cli.max_rounds),
    }
}

fn simulate_command(
    selector: &Selector<'_, StrategyType>,
    answer: Option<&str>,
    verbose: bool,
    max_rounds: usize,
) -> Result<()> {
    let answer = match answer {
        Some(text) => Word::new(text).with_context(|| format!("invalid answer {text:?}"))?,
        None => selector
            .answers()
            .choose(&mut rand::rng())
            .cloned()
            .context("answer list is empty")?,
    };

    if verbose {
        let opening = selector.select_best_guess(&selector.initial_clue(), 0.0);
        if let Some(ranking) = opening.ranking() {
            print_ranking(ranking);
        }
    }

    let bar = progress_bar(0, "scoring");
    let config = SimulateConfig::new(answer).with_max_rounds(max_rounds);
    let result = simulate_game(selector, &config, &bar)?;
    print_game_result(&result, selector.alphabet(), verbose);
    Ok(())
}

fn benchmark_command(
    selector: &Selector<'_, StrategyType>,
    count: Option<usize>,
    max_rounds: usize,
) -> Result<()> {
    let answers = selector.answers();
    let test_words = &answers[..count.unwrap_or(answers.len()).min(answers.len())];

    println!("🎯 Testing {} words...", test_words.len());
    let bar = progress_bar(test_words.len(), "benchmark");
    let result = run_benchmark_with_progress(selector, test_words, max_rounds, &bar)?;
    print_benchmark_result(&result);
    Ok(())
}
