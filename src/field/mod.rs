//! Edit Field
//!
//! Binds word motion and click snapping to the state a single-line text
//! widget keeps:
//! - the value being edited
//! - the cursor and the selection anchor
//! - the first visible character (horizontal scroll)
//!
//! Rendering and key dispatch stay with the host. The host translates events
//! into the calls below and redraws from the resulting state.

use std::ops::Range;

use tracing::debug;

use crate::buffer::{CharBuffer, Direction};
use crate::error::Result;
use crate::settings::SelectionOptions;
use crate::snap::TextMeasurer;

/// Cursor and selection state of a single-line text widget
#[derive(Debug, Clone, Default)]
pub struct EditField {
    /// Current text content
    value: CharBuffer,
    /// Cursor position (character index)
    cursor: usize,
    /// Other end of the selection; equal to `cursor` when nothing is selected
    anchor: usize,
    /// Horizontal scroll offset (character index)
    display_pos: usize,
    /// Behaviour switches
    options: SelectionOptions,
    /// Anchor recorded by the last click, while the pointer is held
    drag_anchor: Option<usize>,
}

impl EditField {
    /// Create an empty field with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set initial content; the cursor goes to the end
    pub fn with_content(mut self, content: &str) -> Self {
        self.set_value(content);
        self
    }

    pub fn with_options(mut self, options: SelectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the content, collapsing the selection at the end
    pub fn set_value(&mut self, content: &str) {
        self.value = CharBuffer::from(content);
        self.cursor = self.value.len();
        self.anchor = self.cursor;
        self.display_pos = self.display_pos.min(self.value.len());
        self.drag_anchor = None;
    }

    pub fn value(&self) -> &CharBuffer {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn display_pos(&self) -> usize {
        self.display_pos
    }

    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SelectionOptions {
        &mut self.options
    }

    /// Selected character range, ordered
    pub fn selection(&self) -> Range<usize> {
        self.cursor.min(self.anchor)..self.cursor.max(self.anchor)
    }

    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    pub fn selected_text(&self) -> String {
        let Range { start, end } = self.selection();
        self.value.range(start, end).iter().collect()
    }

    /// Place the cursor; the anchor follows unless `extend` is set
    pub fn set_cursor(&mut self, index: usize, extend: bool) -> Result<()> {
        self.value.check_cursor(index)?;
        self.cursor = index;
        if !extend {
            self.anchor = index;
        }
        Ok(())
    }

    /// Position `count` words away from `index`, per the configured motion
    pub fn word_position(&self, count: isize, index: usize) -> Result<usize> {
        self.options.word_motion.apply(&self.value, index, count)
    }

    /// Move the cursor by `count` words; negative counts move left
    pub fn move_words(&mut self, count: isize, extend: bool) -> Result<()> {
        let target = self.word_position(count, self.cursor)?;
        self.set_cursor(target, extend)
    }

    /// Jump to the start or end of the value
    pub fn move_to_edge(&mut self, direction: Direction, extend: bool) {
        self.cursor = self.value.edge(direction);
        if !extend {
            self.anchor = self.cursor;
        }
    }

    /// Resolve a click at `x` pixels right of the first visible character
    fn boundary_at<M>(&self, measurer: &M, x: i32) -> Result<usize>
    where
        M: TextMeasurer + ?Sized,
    {
        let visible = self.value.tail(self.display_pos);
        let offset = self.options.click_snap.resolve(measurer, visible, x)?;
        Ok((self.display_pos + offset).min(self.value.len()))
    }

    /// Place the cursor at the boundary nearest to a click
    ///
    /// Collapses any selection and starts a drag from the new position.
    pub fn click<M>(&mut self, measurer: &M, x: i32) -> Result<usize>
    where
        M: TextMeasurer + ?Sized,
    {
        let index = self.boundary_at(measurer, x)?;
        self.set_cursor(index, false)?;
        self.drag_anchor = Some(index);
        debug!(x, index, display_pos = self.display_pos, "click");
        Ok(index)
    }

    /// Follow the pointer while the button is held
    ///
    /// With `drag_select` the anchor stays where the drag started; otherwise
    /// the cursor just follows the pointer.
    pub fn drag<M>(&mut self, measurer: &M, x: i32) -> Result<usize>
    where
        M: TextMeasurer + ?Sized,
    {
        let index = self.boundary_at(measurer, x)?;
        match self.drag_anchor.filter(|_| self.options.drag_select) {
            Some(anchor) => {
                self.cursor = index;
                self.anchor = anchor;
            }
            None => self.set_cursor(index, false)?,
        }
        debug!(x, index, anchor = self.anchor, "drag");
        Ok(index)
    }

    /// Finish a drag started by [`EditField::click`]
    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    /// Set the first visible character, clamped to the value
    pub fn scroll_to(&mut self, display_pos: usize) {
        self.display_pos = display_pos.min(self.value.len());
    }

    /// Scroll so that the cursor lies within `inner_width` pixels of text
    pub fn ensure_cursor_visible<M>(&mut self, measurer: &M, inner_width: u32)
    where
        M: TextMeasurer + ?Sized,
    {
        if self.cursor < self.display_pos {
            self.display_pos = self.cursor;
            return;
        }
        while self.display_pos < self.cursor
            && measurer.width(self.value.range(self.display_pos, self.cursor)) > inner_width
        {
            self.display_pos += 1;
        }
    }
}
