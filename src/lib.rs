//! Wordle Clues
//!
//! A Wordle solver built on combinable clues. Feedback from each round is
//! turned into a [`Clue`], clues are intersected as the game goes on, and a
//! [`Selector`] ranks the guesses still consistent with them using one of
//! several interchangeable scoring strategies.
//!
//! Works for any fixed word length up to 20 and any ASCII alphabet.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clues::{Alphabet, Clue, Word, evaluate};
//!
//! let alphabet = Alphabet::lowercase();
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let feedback = evaluate(&alphabet, &guess, &answer).unwrap();
//! assert_eq!(feedback.to_string(), "--G-G");
//!
//! let clue = Clue::from_feedback(&alphabet, &guess, &feedback).unwrap();
//! assert!(clue.matches(&answer));
//! ```

// Core domain types
pub mod core;

// Constraint state
pub mod clue;

// Scoring and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use clue::{Clue, CountRange};
pub use core::{Alphabet, ClueError, Feedback, Outcome, Word, evaluate};
pub use solver::{Scorer, Selection, Selector, SelectorConfig, StrategyType};
