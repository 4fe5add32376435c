//! Word list loading utilities
//!
//! Reads plain-text vocabularies, one word per line.

use crate::core::{Alphabet, ClueError, Word};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank line is not a valid word; `line` is 1-based.
    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: ClueError,
    },
}

/// Load words from a file
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Every
/// other line must hold a word of length `len` over `alphabet`.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidWord` for the first bad line.
///
/// # Examples
/// ```no_run
/// use wordle_clues::core::Alphabet;
/// use wordle_clues::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt", &Alphabet::lowercase(), 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
    len: usize,
) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content, alphabet, len)
}

/// Parse a word list held in memory
///
/// Same rules as [`load_from_file`].
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first bad line.
pub fn parse_words(content: &str, alphabet: &Alphabet, len: usize) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line.trim(), alphabet, len)
                .map_err(|source| LoadError::InvalidWord {
                    line: index + 1,
                    source,
                })
        })
        .collect()
}

fn parse_line(text: &str, alphabet: &Alphabet, len: usize) -> Result<Word, ClueError> {
    let word = alphabet.parse_word(text)?;
    if word.len() != len {
        return Err(ClueError::LengthMismatch {
            expected: len,
            actual: word.len(),
        });
    }
    Ok(word)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_clues::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
