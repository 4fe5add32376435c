//! Compact symbol sets
//!
//! Every symbol the solver handles is a single ASCII byte, so a set of
//! symbols fits in one `u128` with bit `b` standing for byte `b`.

use std::fmt;

/// A set of ASCII symbols stored as a 128-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharSet(u128);

impl CharSet {
    /// The set containing no symbols
    pub const EMPTY: Self = Self(0);

    /// Build a set from a sequence of bytes
    ///
    /// Bytes outside the ASCII range are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::CharSet;
    ///
    /// let set = CharSet::from_bytes(b"cab");
    /// assert!(set.contains(b'a'));
    /// assert!(!set.contains(b'd'));
    /// assert_eq!(set.to_string(), "abc");
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().fold(Self::EMPTY, |set, &b| set.with(b))
    }

    /// The set holding exactly one symbol
    #[inline]
    #[must_use]
    pub const fn singleton(symbol: u8) -> Self {
        Self::EMPTY.with(symbol)
    }

    /// Copy of this set with `symbol` added
    #[inline]
    #[must_use]
    pub const fn with(self, symbol: u8) -> Self {
        if symbol < 128 {
            Self(self.0 | (1u128 << symbol))
        } else {
            self
        }
    }

    /// Copy of this set with `symbol` removed
    #[inline]
    #[must_use]
    pub const fn without(self, symbol: u8) -> Self {
        if symbol < 128 {
            Self(self.0 & !(1u128 << symbol))
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, symbol: u8) -> bool {
        symbol < 128 && self.0 & (1u128 << symbol) != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Symbols in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the symbols in ascending byte order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..128).filter(move |&b| self.contains(b))
    }
}

impl FromIterator<u8> for CharSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}
