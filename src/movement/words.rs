//! Word-by-word cursor traversal over a [`CharBuffer`]
//!
//! A traversal crosses `|count|` tokens. Before each token a single
//! separating space is stepped over; a longer run of spaces is a token of
//! its own. The token itself is scanned with a [`TokenScanner`], which
//! decides when the next character no longer belongs to it.

use tracing::{trace, warn};

use super::classify::{classify_char, is_whitespace_char, CharClass};
use super::machine::TokenState;
use crate::buffer::{CharBuffer, Direction};
use crate::error::Result;

/// Something that can grow a token one character at a time
pub trait TokenScanner: Copy {
    /// Scanner state after the first character of a token
    fn begin(c: char) -> Self;

    /// Scanner state after `c`, or `None` if `c` ends the token
    fn extend(self, c: char) -> Option<Self>;
}

impl TokenScanner for TokenState {
    fn begin(c: char) -> Self {
        TokenState::start_read(c)
    }

    fn extend(self, c: char) -> Option<Self> {
        let next = self.read(c);
        (!next.is_done()).then_some(next)
    }
}

impl TokenScanner for CharClass {
    fn begin(c: char) -> Self {
        classify_char(c)
    }

    fn extend(self, c: char) -> Option<Self> {
        self.contains(c).then_some(self)
    }
}

/// How a word is delimited when moving by words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordMotion {
    /// Tokens from the [`TokenState`] machine (numbers stay whole)
    #[default]
    Segmented,
    /// Maximal runs of a single [`CharClass`]
    ClassRun,
}

impl WordMotion {
    /// Move `start` by `count` words using this motion
    pub fn apply(self, buffer: &CharBuffer, start: usize, count: isize) -> Result<usize> {
        match self {
            WordMotion::Segmented => move_by_words(buffer, start, count),
            WordMotion::ClassRun => move_by_class_runs(buffer, start, count),
        }
    }
}

/// Move the cursor by `count` words; negative counts move left
///
/// Returns the new cursor position. Reaching either end of the buffer
/// stops the traversal there. `start` beyond the end of the buffer is an
/// error.
///
/// # Examples
/// ```
/// use better_selection::buffer::CharBuffer;
/// use better_selection::movement::move_by_words;
///
/// let buf = CharBuffer::from("pay $12.50 now");
/// assert_eq!(move_by_words(&buf, 0, 1).unwrap(), 3);
/// assert_eq!(move_by_words(&buf, 3, 1).unwrap(), 10);
/// assert_eq!(move_by_words(&buf, 14, -1).unwrap(), 11);
/// ```
pub fn move_by_words(buffer: &CharBuffer, start: usize, count: isize) -> Result<usize> {
    traverse::<TokenState>(buffer, start, count)
}

/// Move the cursor by `count` runs of same-class characters
///
/// `foo->bar` is three runs; `$12.50` is three as well (`$12`, `.`, `50`).
pub fn move_by_class_runs(buffer: &CharBuffer, start: usize, count: isize) -> Result<usize> {
    traverse::<CharClass>(buffer, start, count)
}

fn traverse<S: TokenScanner>(buffer: &CharBuffer, start: usize, count: isize) -> Result<usize> {
    if let Err(err) = buffer.check_cursor(start) {
        warn!(start, len = buffer.len(), "word motion from invalid cursor");
        return Err(err);
    }
    let Some(direction) = Direction::from_count(count) else {
        return Ok(start);
    };

    let mut index = start;
    for _ in 0..count.unsigned_abs() {
        if buffer.is_edge(index, direction) {
            break;
        }
        index = skip_token::<S>(buffer, index, direction);
    }

    trace!(start, count, end = index, "word motion");
    Ok(index)
}

/// Step over one optional separating space and then one token
fn skip_token<S: TokenScanner>(buffer: &CharBuffer, mut index: usize, direction: Direction) -> usize {
    if buffer.peek(index, direction).is_some_and(is_whitespace_char) {
        index = direction.step(index);
        if buffer.is_edge(index, direction) {
            return index;
        }
    }

    let Some(first) = buffer.peek(index, direction) else {
        return buffer.edge(direction);
    };
    let mut scanner = S::begin(first);

    loop {
        index = direction.step(index);
        if buffer.is_edge(index, direction) {
            return index;
        }
        let Some(c) = buffer.peek(index, direction) else {
            return buffer.edge(direction);
        };
        match scanner.extend(c) {
            Some(next) => scanner = next,
            None => return index,
        }
    }
}
