//! Accumulated constraint state
//!
//! A [`Clue`] records what is known about the answer: which symbols may
//! still appear at each position, and how many times certain symbols must
//! occur. Clues are values. Folding in new feedback builds a new clue
//! ([`Clue::from_feedback`] then [`Clue::combine`]) rather than mutating the
//! old one, so a clue can be shared freely with concurrent scorers.

mod combine;
mod derive;
mod filter;

use crate::core::{Alphabet, CharSet};
use std::collections::BTreeMap;
use std::fmt;

/// Inclusive bounds on how many times a symbol occurs in the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountRange {
    pub min: u8,
    pub max: u8,
}

impl CountRange {
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Check whether `count` lies within the range
    #[inline]
    #[must_use]
    pub const fn contains(self, count: usize) -> bool {
        self.min as usize <= count && count <= self.max as usize
    }

    /// The tightest range implied by both `self` and `other`
    #[must_use]
    pub fn tighten(self, other: Self) -> Self {
        Self::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// False once contradictory bounds have been combined
    #[must_use]
    pub const fn is_satisfiable(self) -> bool {
        self.min <= self.max
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Everything learned about the answer so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    possible_chars: Vec<CharSet>,
    included_chars: BTreeMap<u8, CountRange>,
}

impl Clue {
    /// The clue of a fresh game: every symbol allowed everywhere
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::clue::Clue;
    /// use wordle_clues::core::{Alphabet, Word};
    ///
    /// let clue = Clue::new(&Alphabet::lowercase(), 5);
    /// assert_eq!(clue.len(), 5);
    /// assert!(clue.matches(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn new(alphabet: &Alphabet, len: usize) -> Self {
        Self {
            possible_chars: vec![alphabet.symbols(); len],
            included_chars: BTreeMap::new(),
        }
    }

    /// Build a clue from explicit constraints
    ///
    /// Repeated symbols in `included_chars` are tightened together.
    #[must_use]
    pub fn from_parts(
        possible_chars: Vec<CharSet>,
        included_chars: impl IntoIterator<Item = (u8, CountRange)>,
    ) -> Self {
        let mut included = BTreeMap::new();
        for (symbol, range) in included_chars {
            included
                .entry(symbol)
                .and_modify(|r: &mut CountRange| *r = r.tighten(range))
                .or_insert(range);
        }

        Self {
            possible_chars,
            included_chars: included,
        }
    }

    /// Word length this clue applies to
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.possible_chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.possible_chars.is_empty()
    }

    /// Allowed symbols for every position
    #[inline]
    #[must_use]
    pub fn possible_chars(&self) -> &[CharSet] {
        &self.possible_chars
    }

    /// Allowed symbols at `position`
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn possible_at(&self, position: usize) -> CharSet {
        self.possible_chars[position]
    }

    /// Count constraints, ordered by symbol
    #[inline]
    #[must_use]
    pub const fn included_chars(&self) -> &BTreeMap<u8, CountRange> {
        &self.included_chars
    }

    /// Count constraint for a single symbol, if any
    #[must_use]
    pub fn included(&self, symbol: u8) -> Option<CountRange> {
        self.included_chars.get(&symbol).copied()
    }

    /// The answer, once every position is pinned to a single symbol
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        self.possible_chars
            .iter()
            .map(|set| {
                let mut symbols = set.iter();
                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Some(char::from(symbol)),
                    _ => None,
                }
            })
            .collect()
    }
}
