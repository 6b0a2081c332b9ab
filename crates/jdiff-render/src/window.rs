//! Viewport windowing for large diffs.
//!
//! Past a size threshold the full line sequence is still computed, but only
//! the rows inside the visible window (plus overscan) are rendered.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Whether a diff is rendered in full or through a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Full,
    Virtualized,
}

impl Layout {
    /// `Virtualized` when either side has more than `threshold` lines.
    pub fn for_sides(left_len: usize, right_len: usize, threshold: usize) -> Self {
        if left_len > threshold || right_len > threshold {
            Layout::Virtualized
        } else {
            Layout::Full
        }
    }
}

/// Fixed-row-height viewport geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub row_height: usize,
    pub overscan: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            row_height: 24,
            overscan: 10,
        }
    }
}

impl Viewport {
    /// Height of the scrollable area holding `total` rows.
    pub fn total_height(&self, total: usize) -> usize {
        total.saturating_mul(self.row_height)
    }

    /// Vertical offset of row `index`.
    pub fn offset_of(&self, index: usize) -> usize {
        index.saturating_mul(self.row_height)
    }

    /// Row indices to render for a window of `height` pixels scrolled to
    /// `scroll_top`, widened by the overscan and clamped to `0..total`.
    pub fn visible_range(&self, total: usize, scroll_top: usize, height: usize) -> Range<usize> {
        if total == 0 || self.row_height == 0 {
            return 0..0;
        }
        let first = (scroll_top / self.row_height).min(total);
        let last = scroll_top
            .saturating_add(height)
            .div_ceil(self.row_height)
            .min(total);
        let start = first.saturating_sub(self.overscan);
        let end = last.saturating_add(self.overscan).min(total);
        start..end.max(start)
    }

    /// Same as [`visible_range`](Self::visible_range) with the window given
    /// in rows instead of pixels.
    pub fn visible_rows(&self, total: usize, first_row: usize, rows: usize) -> Range<usize> {
        self.visible_range(total, self.offset_of(first_row), self.offset_of(rows))
    }
}

/// The slice of `items` covered by `range`, clamped to the slice bounds.
pub fn window<T>(items: &[T], range: Range<usize>) -> &[T] {
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    &items[start..end]
}
