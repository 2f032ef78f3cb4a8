//! Movement semantics for word-by-word navigation
//!
//! ## Design
//!
//! Every character falls into exactly one class:
//! - **Word**: letters, ideographs, decimal digits, underscore, currency symbols
//! - **Whitespace**: Unicode space characters (not TAB or control characters)
//! - **Punctuation**: everything else
//!
//! Word motion does not stop at every class change. A token machine reads
//! characters one at a time so that numbers with currency symbols and one
//! decimal separator move as a single unit:
//! - `$56.78` is ONE token
//! - `1.2.3` is TWO tokens: `1.2` and `.3`
//! - `foo->bar` is FOUR tokens: `foo`, `-`, `>`, `bar` (symbols are single tokens)
//!
//! ## Modules
//!
//! - [`unicode`] - Unicode property tables (digits, spaces, ideographs, currency)
//! - [`classify`] - Character classes
//! - [`machine`] - Token state machine
//! - [`words`] - Buffer traversal by words

pub mod classify;
pub mod machine;
pub mod unicode;
pub mod words;

pub use classify::{classify_char, is_punctuation_char, is_whitespace_char, is_word_char, CharClass};
pub use machine::{segment, TokenState};
pub use words::{move_by_class_runs, move_by_words, TokenScanner, WordMotion};
