//! The fixed symbol set of a run
//!
//! Every word and clue is validated against one `Alphabet`, chosen when the
//! engine is built. The reference game uses the 26 lowercase letters.

use super::{CharSet, ClueError, Word, WordError};
use std::fmt;

/// The set of symbols a word may be built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: CharSet,
}

impl Alphabet {
    /// Create an alphabet from the characters of `symbols`
    ///
    /// Upper-case letters are folded to lower case, matching [`Word::new`].
    ///
    /// # Errors
    /// Returns `WordError::NonAscii` for non-ASCII input and
    /// `WordError::InvalidLength(0)` when no symbols are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::Alphabet;
    ///
    /// let abc = Alphabet::new("abc").unwrap();
    /// assert_eq!(abc.len(), 3);
    /// assert!(abc.contains(b'b'));
    /// assert!(!abc.contains(b'z'));
    /// ```
    pub fn new(symbols: &str) -> Result<Self, WordError> {
        if !symbols.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let symbols = CharSet::from_bytes(symbols.to_ascii_lowercase().as_bytes());
        if symbols.is_empty() {
            return Err(WordError::InvalidLength(0));
        }

        Ok(Self { symbols })
    }

    /// The 26 lowercase ASCII letters
    #[must_use]
    pub fn lowercase() -> Self {
        Self {
            symbols: (b'a'..=b'z').collect(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> CharSet {
        self.symbols
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(symbol)
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check that every symbol of `word` belongs to the alphabet
    ///
    /// # Errors
    /// Returns `ClueError::InvalidSymbol` naming the first offending position.
    pub fn validate(&self, word: &Word) -> Result<(), ClueError> {
        match word.chars().iter().position(|&ch| !self.contains(ch)) {
            None => Ok(()),
            Some(position) => Err(ClueError::InvalidSymbol {
                word: word.text().to_string(),
                position,
                symbol: char::from(word.char_at(position)),
            }),
        }
    }

    /// Parse and validate a word in one step
    ///
    /// # Errors
    /// Returns `ClueError::Word` for malformed text and
    /// `ClueError::InvalidSymbol` for symbols outside the alphabet.
    pub fn parse_word(&self, text: &str) -> Result<Word, ClueError> {
        let word = Word::new(text)?;
        self.validate(&word)?;
        Ok(word)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_has_26_letters() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(alphabet, Alphabet::default());
    }

    #[test]
    fn custom_alphabet_folds_case() {
        let alphabet = Alphabet::new("ABCabc").unwrap();
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn empty_alphabet_rejected() {
        assert_eq!(Alphabet::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Alphabet::new("äö"), Err(WordError::NonAscii));
    }

    #[test]
    fn validate_reports_first_invalid_symbol() {
        let alphabet = Alphabet::lowercase();
        let word = Word::new("cr4n3").unwrap();

        assert_eq!(
            alphabet.validate(&word),
            Err(ClueError::InvalidSymbol {
                word: "cr4n3".to_string(),
                position: 2,
                symbol: '4',
            })
        );
    }

    #[test]
    fn parse_word_accepts_valid() {
        let word = Alphabet::lowercase().parse_word("Slate").unwrap();
        assert_eq!(word.text(), "slate");
    }

    #[test]
    fn parse_word_rejects_outside_alphabet() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert!(matches!(
            alphabet.parse_word("abd"),
            Err(ClueError::InvalidSymbol { position: 2, .. })
        ));
        assert!(matches!(
            alphabet.parse_word(""),
            Err(ClueError::Word(WordError::InvalidLength(0)))
        ));
    }
}
