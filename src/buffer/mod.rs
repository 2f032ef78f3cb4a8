//! Read-only character buffer used by cursor navigation
//!
//! Cursor positions sit *between* characters: position `i` has the
//! character `i - 1` on its left and the character `i` on its right.
//! Valid positions are `0..=len`.

use std::fmt::{self, Display, Formatter};

use crate::error::{Result, SelectionError};

/// Direction of cursor travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction implied by a signed count, `None` for zero
    pub fn from_count(count: isize) -> Option<Self> {
        match count {
            0 => None,
            c if c < 0 => Some(Direction::Left),
            _ => Some(Direction::Right),
        }
    }

    /// Position one step from `index` in this direction
    ///
    /// Callers check [`CharBuffer::is_edge`] first; stepping left from 0
    /// saturates.
    pub fn step(self, index: usize) -> usize {
        match self {
            Direction::Left => index.saturating_sub(1),
            Direction::Right => index + 1,
        }
    }
}

/// An immutable sequence of Unicode scalar values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters (also the last valid cursor position)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character immediately left of cursor position `index`
    pub fn peek_left(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|i| self.char_at(i))
    }

    /// Character immediately right of cursor position `index`
    pub fn peek_right(&self, index: usize) -> Option<char> {
        self.char_at(index)
    }

    /// Character the cursor at `index` would pass over moving in `direction`
    pub fn peek(&self, index: usize, direction: Direction) -> Option<char> {
        match direction {
            Direction::Left => self.peek_left(index),
            Direction::Right => self.peek_right(index),
        }
    }

    /// Cursor position at the end reached by travelling in `direction`
    pub fn edge(&self, direction: Direction) -> usize {
        match direction {
            Direction::Left => 0,
            Direction::Right => self.len(),
        }
    }

    /// True when no further travel in `direction` is possible from `index`
    pub fn is_edge(&self, index: usize, direction: Direction) -> bool {
        match direction {
            Direction::Left => index == 0,
            Direction::Right => index >= self.len(),
        }
    }

    /// Ensure `index` is a valid cursor position
    pub fn check_cursor(&self, index: usize) -> Result<()> {
        if index > self.len() {
            return Err(SelectionError::out_of_range(index, self.len()));
        }
        Ok(())
    }

    /// Characters from `start` to the end, empty if `start` is past the end
    pub fn tail(&self, start: usize) -> &[char] {
        self.chars.get(start..).unwrap_or(&[])
    }

    /// Characters in `start..end`, clamped to the buffer
    pub fn range(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.chars[start..end]
    }

    /// UTF-8 byte offset of cursor position `index` (clamped to the end)
    pub fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .iter()
            .take(index)
            .map(|c| c.len_utf8())
            .sum()
    }

    /// Cursor position containing UTF-8 byte offset `byte`
    ///
    /// Offsets inside a multi-byte character resolve to the position
    /// before it.
    pub fn char_index(&self, byte: usize) -> usize {
        let mut offset = 0;
        for (idx, c) in self.chars.iter().enumerate() {
            offset += c.len_utf8();
            if offset > byte {
                return idx;
            }
        }
        self.len()
    }
}

impl Display for CharBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl From<&str> for CharBuffer {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<String> for CharBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Vec<char>> for CharBuffer {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl FromIterator<char> for CharBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
