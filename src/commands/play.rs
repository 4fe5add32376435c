//! Interactive play mode
//!
//! Suggests a guess each round and reads the feedback the game showed for it.

use super::simulate::update_clue;
use crate::clue::Clue;
use crate::core::{ClueError, Feedback, Word};
use crate::output::formatters::{colored_tiles, describe_clue};
use crate::solver::{Scorer, Selection, Selector};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that end an interactive session
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Clue(#[from] ClueError),
}

/// What happened over one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub games_started: usize,
    pub games_won: usize,
}

enum Command {
    Quit,
    New,
    Undo,
    Feedback(Feedback),
}

/// Run interactive play on the terminal
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<S: Scorer>(
    selector: &Selector<'_, S>,
    max_rounds: usize,
) -> Result<PlayStats, PlayError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(selector, max_rounds, stdin.lock(), stdout.lock())
}

/// Run interactive play over any line-based input and output
///
/// End of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_session<S: Scorer, R: BufRead, W: Write>(
    selector: &Selector<'_, S>,
    max_rounds: usize,
    mut input: R,
    mut out: W,
) -> Result<PlayStats, PlayError> {
    let alphabet = selector.alphabet();
    let len = selector.word_len();
    let mut stats = PlayStats {
        games_started: 1,
        games_won: 0,
    };

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "WORDLE CLUES - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nAfter each guess, enter the feedback you got:")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - or 'win' if you got it right")?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    // clues[i] is what was known before round i
    let mut clues: Vec<Clue> = vec![selector.initial_clue()];
    let mut history: Vec<(Word, Feedback)> = Vec::new();

    loop {
        let round = history.len();
        let clue = clues.last().cloned().unwrap_or_else(|| selector.initial_clue());

        if round >= max_rounds {
            writeln!(out, "\n❌ Out of rounds. Type 'undo', 'new' or 'quit'.")?;
            match read_command(&mut input, &mut out, "Command", len)? {
                Some(Command::Quit) | None => break,
                Some(Command::New) => {
                    new_game(&mut clues, &mut history, selector.initial_clue());
                    stats.games_started += 1;
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Some(Command::Undo) => undo(&mut clues, &mut history, &mut out)?,
                Some(Command::Feedback(_)) => {}
            }
            continue;
        }

        let game_progress = round as f64 / max_rounds as f64;
        let played: Vec<&Word> = history.iter().map(|(word, _)| word).collect();
        let ranking = match selector.select_best_unplayed(&clue, game_progress, &played, &()) {
            Selection::Guess(ranking) => ranking,
            Selection::NoCandidates => {
                writeln!(
                    out,
                    "\n❌ No candidates remain! Your feedback may be incorrect."
                )?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                match read_command(&mut input, &mut out, "Command", len)? {
                    Some(Command::Quit) | None => break,
                    Some(Command::New) => {
                        new_game(&mut clues, &mut history, selector.initial_clue());
                        stats.games_started += 1;
                        writeln!(out, "\n🔄 New game started!\n")?;
                    }
                    Some(Command::Undo) => undo(&mut clues, &mut history, &mut out)?,
                    Some(Command::Feedback(_)) => {}
                }
                continue;
            }
        };

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Round {}: {} possible answers",
            round + 1,
            ranking.possible_answers
        )?;
        if round > 0 {
            writeln!(out, "Known: {}", describe_clue(&clue, alphabet))?;
        }
        writeln!(out, "{}", "─".repeat(60))?;

        let guess = ranking.word();
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        )?;
        for (i, entry) in ranking.top.iter().enumerate().skip(1) {
            writeln!(
                out,
                "   {}. {} {:.6}",
                i + 1,
                entry.word.text().to_uppercase(),
                entry.score
            )?;
        }

        if ranking.possible_answers <= 10 {
            let ctx = selector.context(&clue, game_progress);
            let remaining: Vec<String> = ctx
                .possible_answers()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            writeln!(out, "\nRemaining answers: {}", remaining.join(", "))?;
        }
        writeln!(out)?;

        let command = match read_command(&mut input, &mut out, "Feedback", len)? {
            Some(command) => command,
            None => break,
        };

        match command {
            Command::Quit => break,
            Command::New => {
                new_game(&mut clues, &mut history, selector.initial_clue());
                stats.games_started += 1;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Undo => undo(&mut clues, &mut history, &mut out)?,
            Command::Feedback(feedback) => {
                let next = update_clue(&clue, alphabet, guess, &feedback)?;
                let solved = feedback.is_perfect();
                clues.push(next);
                history.push((guess.clone(), feedback));

                if solved {
                    stats.games_won += 1;
                    print_victory(&mut out, &history)?;

                    let again = read_line(&mut input, &mut out, "Play again? (yes/no)")?;
                    match again.as_deref().map(str::to_lowercase).as_deref() {
                        Some("yes" | "y") => {
                            new_game(&mut clues, &mut history, selector.initial_clue());
                            stats.games_started += 1;
                            writeln!(out, "\n🔄 New game started!\n")?;
                        }
                        _ => break,
                    }
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn new_game(clues: &mut Vec<Clue>, history: &mut Vec<(Word, Feedback)>, initial: Clue) {
    clues.clear();
    clues.push(initial);
    history.clear();
}

fn undo<W: Write>(
    clues: &mut Vec<Clue>,
    history: &mut Vec<(Word, Feedback)>,
    out: &mut W,
) -> io::Result<()> {
    if history.pop().is_some() {
        clues.pop();
        writeln!(out, "✓ Undone! Back to round {}\n", history.len() + 1)
    } else {
        writeln!(out, "Nothing to undo!\n")
    }
}

/// Prompt until a valid command or feedback is entered; `None` at end of input
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    len: usize,
) -> io::Result<Option<Command>> {
    loop {
        let Some(line) = read_line(input, out, prompt)? else {
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(Some(Command::Quit)),
            "new" | "n" => return Ok(Some(Command::New)),
            "undo" | "u" => return Ok(Some(Command::Undo)),
            "win" | "correct" | "solved" => {
                return Ok(Some(Command::Feedback(Feedback::perfect(len))));
            }
            _ => match line.parse::<Feedback>() {
                Ok(feedback) if feedback.len() == len => {
                    return Ok(Some(Command::Feedback(feedback)));
                }
                Ok(feedback) => writeln!(
                    out,
                    "❌ Expected {len} marks, got {}\n",
                    feedback.len()
                )?,
                Err(e) => writeln!(out, "❌ {e}\n")?,
            },
        }
    }
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_victory<W: Write>(out: &mut W, history: &[(Word, Feedback)]) -> io::Result<()> {
    let turns = history.len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  S O L V E D !  🎉    ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, feedback)) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_tiles(word, feedback),
            feedback.to_emoji()
        )?;
    }
    writeln!(out)
}
