//! Word lists
//!
//! Loading vocabularies from disk and combining them into a guess list.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_words, words_from_slice};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Every word that may be typed: `allowed` followed by any answers it lacks
///
/// Duplicates are dropped; first occurrence wins, so the order of
/// `allowed` is kept.
#[must_use]
pub fn merge_vocabularies(allowed: &[Word], answers: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    allowed
        .iter()
        .chain(answers)
        .filter(|w| seen.insert(w.text()))
        .cloned()
        .collect()
}
