//! Token state machine
//!
//! Reads a token one character at a time and reports its category. Once a
//! character does not fit the current category the machine answers
//! [`TokenState::Done`] and the token ends *before* that character.
//!
//! The numeric states let `3.14`, `$1234.56` and `12_000` move as one unit
//! while still stopping at a second decimal separator.

use super::unicode::{
    is_currency_symbol, is_decimal_digit, is_decimal_separator, is_ideographic,
    is_space_separator,
};

/// Category of the token read so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenState {
    /// Nothing read yet, or underscores only
    Unknown,
    /// Digits and underscores
    Numeric,
    /// Digits and currency symbols
    IntegerWithCurrency,
    /// Digits, currency symbols and exactly one decimal separator
    Float,
    /// Letters, ideographs and underscores; digits may follow
    Word,
    /// Space characters only
    Whitespace,
    /// A single character that fits no other category
    Special,
    /// The last character read does not belong to the token
    Done,
}

/// Digit or underscore
fn is_digit(c: char) -> bool {
    is_decimal_digit(c) || c == '_'
}

/// Letter, ideograph or underscore
fn is_word_letter(c: char) -> bool {
    c.is_alphabetic() || is_ideographic(c) || c == '_'
}

impl TokenState {
    /// State after reading the first character of a token
    pub fn start_read(c: char) -> Self {
        TokenState::Unknown.read(c)
    }

    /// State after reading `c` in this state
    pub fn read(self, c: char) -> Self {
        match self {
            TokenState::Unknown => {
                if c == '_' {
                    TokenState::Unknown
                } else if is_digit(c) {
                    TokenState::Numeric
                } else if is_currency_symbol(c) {
                    TokenState::IntegerWithCurrency
                } else if is_decimal_separator(c) {
                    TokenState::Float
                } else if is_word_letter(c) {
                    TokenState::Word
                } else if is_space_separator(c) {
                    TokenState::Whitespace
                } else {
                    TokenState::Special
                }
            }
            TokenState::Numeric => {
                if is_digit(c) {
                    TokenState::Numeric
                } else if is_currency_symbol(c) {
                    TokenState::IntegerWithCurrency
                } else if is_decimal_separator(c) {
                    TokenState::Float
                } else if is_word_letter(c) {
                    TokenState::Word
                } else {
                    TokenState::Done
                }
            }
            TokenState::IntegerWithCurrency => {
                if is_digit(c) || is_currency_symbol(c) {
                    TokenState::IntegerWithCurrency
                } else if is_decimal_separator(c) {
                    TokenState::Float
                } else {
                    TokenState::Done
                }
            }
            TokenState::Float => {
                if is_digit(c) || is_currency_symbol(c) {
                    TokenState::Float
                } else {
                    TokenState::Done
                }
            }
            TokenState::Word => {
                if is_word_letter(c) || is_digit(c) {
                    TokenState::Word
                } else {
                    TokenState::Done
                }
            }
            TokenState::Whitespace => {
                if is_space_separator(c) {
                    TokenState::Whitespace
                } else {
                    TokenState::Done
                }
            }
            TokenState::Special | TokenState::Done => TokenState::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == TokenState::Done
    }
}

/// Split `chars` into maximal tokens, left to right
///
/// Each entry is the token's final state and its length in characters.
pub fn segment(chars: &[char]) -> Vec<(TokenState, usize)> {
    let mut tokens = Vec::new();
    let mut rest = chars;

    while let Some((&first, tail)) = rest.split_first() {
        let mut state = TokenState::start_read(first);
        let mut len = 1;
        for &c in tail {
            let next = state.read(c);
            if next.is_done() {
                break;
            }
            state = next;
            len += 1;
        }
        tokens.push((state, len));
        rest = &rest[len..];
    }

    tokens
}
