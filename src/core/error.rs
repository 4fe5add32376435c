//! Error types shared by the core and the clue engine

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word length must be between 1 and {max}, got {0}", max = super::MAX_WORD_LEN)]
    InvalidLength(usize),

    #[error("word must contain only ASCII characters")]
    NonAscii,
}

/// Errors raised by feedback evaluation and clue handling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// A word contains a symbol outside the configured alphabet.
    #[error("symbol {symbol:?} at position {position} of \"{word}\" is not in the alphabet")]
    InvalidSymbol {
        word: String,
        position: usize,
        symbol: char,
    },

    /// Two values of different fixed lengths were combined.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Word(#[from] WordError),
}

/// Errors raised when parsing feedback typed by a player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback is empty")]
    Empty,

    #[error("feedback has {0} marks, more than the supported maximum")]
    TooLong(usize),

    #[error("invalid feedback mark {0:?}; use G/Y/- or 🟩🟨⬜")]
    InvalidMark(char),
}
