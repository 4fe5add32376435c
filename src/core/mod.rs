//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: symbols, words and
//! the feedback evaluator. Everything here is pure and deterministic.

mod alphabet;
mod charset;
mod error;
mod feedback;
mod word;

pub use alphabet::Alphabet;
pub use charset::CharSet;
pub use error::{ClueError, FeedbackError, WordError};
pub use feedback::{Feedback, Outcome, evaluate};
pub use word::Word;

pub(crate) use word::SymbolCounts;

/// Longest supported word; keeps a feedback code within a `u32`
pub const MAX_WORD_LEN: usize = 20;

/// Length of the reference game's words
pub const DEFAULT_WORD_LEN: usize = 5;
