//! Click-to-cursor mapping
//!
//! Translates a horizontal pixel offset into the character boundary closest
//! to it. Offsets are measured from the left edge of the first displayed
//! character; the host subtracts padding and scroll before calling in.

use tracing::warn;
use unicode_width::UnicodeWidthChar;

use crate::error::{Result, SelectionError};

/// Pixel metrics for displayed text
pub trait TextMeasurer {
    /// Rendered width of `text` in pixels
    fn width(&self, text: &[char]) -> u32;

    /// Length of the longest prefix of `text` whose width is at most `max_width`
    ///
    /// The default adds up single-character widths; measurers that kern
    /// should override it.
    fn longest_prefix_within(&self, text: &[char], max_width: u32) -> usize {
        let mut total: u32 = 0;
        for (idx, c) in text.iter().enumerate() {
            total = total.saturating_add(self.width(std::slice::from_ref(c)));
            if total > max_width {
                return idx;
            }
        }
        text.len()
    }
}

/// Monospace grid: terminal cell width (from `unicode-width`) times a pixel pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasurer {
    pub cell_width: u32,
}

impl CellMeasurer {
    pub fn new(cell_width: u32) -> Self {
        Self { cell_width }
    }
}

impl TextMeasurer for CellMeasurer {
    fn width(&self, text: &[char]) -> u32 {
        let cells: usize = text.iter().map(|c| c.width().unwrap_or(0)).sum();
        u32::try_from(cells)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.cell_width)
    }
}

/// Measurer backed by a per-character advance function
#[derive(Debug, Clone, Copy)]
pub struct CharWidths<F>(pub F);

impl<F> CharWidths<F>
where
    F: Fn(char) -> u32,
{
    pub fn new(advance: F) -> Self {
        Self(advance)
    }
}

impl<F> TextMeasurer for CharWidths<F>
where
    F: Fn(char) -> u32,
{
    fn width(&self, text: &[char]) -> u32 {
        text.iter()
            .fold(0u32, |acc, &c| acc.saturating_add((self.0)(c)))
    }
}

/// How a click inside a character is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickSnap {
    /// Closest boundary; exact midpoints go right
    #[default]
    Nearest,
    /// Always the boundary left of the clicked character
    Leading,
}

impl ClickSnap {
    pub fn resolve<M>(self, measurer: &M, text: &[char], target_x: i32) -> Result<usize>
    where
        M: TextMeasurer + ?Sized,
    {
        match self {
            ClickSnap::Nearest => nearest_boundary(measurer, text, target_x),
            ClickSnap::Leading => {
                let x = non_negative(target_x)?;
                Ok(measurer.longest_prefix_within(text, x).min(text.len()))
            }
        }
    }
}

fn non_negative(target_x: i32) -> Result<u32> {
    u32::try_from(target_x).map_err(|_| {
        warn!(target_x, "click offset left of the text origin");
        SelectionError::negative_offset(target_x)
    })
}

/// Pick the boundary on either side of the character at `k`
///
/// `prefix_width` is the left edge of that character and `char_width` its
/// advance. Returns `k` only when the click is strictly closer to the left
/// edge.
fn snap_within(k: usize, prefix_width: u32, char_width: u32, x: u32) -> usize {
    let space_left = i64::from(x) - i64::from(prefix_width);
    let space_right = i64::from(prefix_width) + i64::from(char_width) - i64::from(x);
    if space_right > space_left {
        k
    } else {
        k + 1
    }
}

/// Character boundary of `text` nearest to pixel offset `target_x`
///
/// Clicks past the end of the text return `text.len()`.
///
/// # Examples
/// ```
/// use better_selection::snap::{nearest_boundary, CellMeasurer};
///
/// let text: Vec<char> = "abc".chars().collect();
/// let cells = CellMeasurer::new(10);
/// assert_eq!(nearest_boundary(&cells, &text, 14).unwrap(), 1);
/// assert_eq!(nearest_boundary(&cells, &text, 16).unwrap(), 2);
/// assert_eq!(nearest_boundary(&cells, &text, 500).unwrap(), 3);
/// ```
pub fn nearest_boundary<M>(measurer: &M, text: &[char], target_x: i32) -> Result<usize>
where
    M: TextMeasurer + ?Sized,
{
    let x = non_negative(target_x)?;
    let k = measurer.longest_prefix_within(text, x).min(text.len());
    if k == text.len() {
        return Ok(k);
    }

    let prefix_width = measurer.width(&text[..k]);
    let char_width = measurer.width(&text[k..=k]);
    Ok(snap_within(k, prefix_width, char_width, x))
}

/// [`nearest_boundary`] against a table of per-character widths
pub fn nearest_boundary_in(widths: &[u32], target_x: i32) -> Result<usize> {
    let x = non_negative(target_x)?;

    let mut prefix_width: u32 = 0;
    for (k, &char_width) in widths.iter().enumerate() {
        let right_edge = prefix_width.saturating_add(char_width);
        if right_edge > x {
            return Ok(snap_within(k, prefix_width, char_width, x));
        }
        prefix_width = right_edge;
    }
    Ok(widths.len())
}
