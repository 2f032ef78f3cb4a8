//! Character classification for movement operations

use super::unicode::{is_currency_symbol, is_decimal_digit, is_ideographic, is_space_separator};

/// Character categories for word movement
///
/// The three classes partition the set of all characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letters, ideographs, decimal digits, underscore and currency symbols
    Word,
    /// Space characters (Zs, Zl, Zp)
    Whitespace,
    /// Everything else
    Punctuation,
}

impl CharClass {
    /// Check whether `c` belongs to this class
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Word => is_word_char(c),
            CharClass::Whitespace => is_whitespace_char(c),
            CharClass::Punctuation => is_punctuation_char(c),
        }
    }
}

/// Classify a character for word boundary detection
pub fn classify_char(c: char) -> CharClass {
    if is_word_char(c) {
        CharClass::Word
    } else if is_whitespace_char(c) {
        CharClass::Whitespace
    } else {
        CharClass::Punctuation
    }
}

/// Check if a character belongs to the Word class
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
        || is_ideographic(c)
        || is_decimal_digit(c)
        || c == '_'
        || is_currency_symbol(c)
}

/// Check if a character is a space character
pub fn is_whitespace_char(c: char) -> bool {
    is_space_separator(c)
}

/// Check if a character is neither a word nor a whitespace character
pub fn is_punctuation_char(c: char) -> bool {
    !is_word_char(c) && !is_whitespace_char(c)
}
