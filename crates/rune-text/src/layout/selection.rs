use core::ops::Range;

use crate::buffer::TextBuffer;
use crate::layout::LineIndex;

/// A text selection between an anchor and an active end, in code units.
///
/// Both ends may be in any order; [`Selection::range`] gives the normalized
/// `start..end`. A zero-length selection means "caret only". The selection
/// does not follow buffer edits by itself: after any mutation the owner must
/// call [`Selection::clamp`] or [`Selection::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Fixed end while extending.
    anchor: usize,
    /// Moving end, follows the caret while shift is held or while dragging.
    active: usize,
}

impl Selection {
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Zero-length selection at `offset`.
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Clear the selection, leaving both ends at `caret`.
    pub fn reset(&mut self, caret: usize) {
        self.anchor = caret;
        self.active = caret;
    }

    /// Move the active end; the anchor stays put.
    pub fn extend_to(&mut self, caret: usize) {
        self.active = caret;
    }

    /// Select `0..len`. The caller moves the caret to `len`.
    pub fn select_all(&mut self, len: usize) {
        self.anchor = 0;
        self.active = len;
    }

    /// Pull both ends back into `0..=len`.
    pub fn clamp(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.active = self.active.min(len);
    }

    /// Selected text decoded from `buffer`.
    pub fn text(&self, buffer: &TextBuffer) -> String {
        buffer.substring(self.range())
    }

    /// Remove the selected range from `buffer` and collapse to its start.
    ///
    /// Returns the new caret position, or `None` without touching the buffer
    /// when nothing is selected.
    pub fn erase(&mut self, buffer: &mut TextBuffer) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let range = buffer.clamp_range(self.range());
        buffer.remove(range.clone());
        self.reset(range.start);
        Some(range.start)
    }

    /// Per-logical-line pieces of the selection, breaks excluded.
    ///
    /// A line the selection only touches at its start yields an empty range.
    pub fn line_ranges<'a>(&self, text: &'a [u16]) -> impl Iterator<Item = Range<usize>> + 'a {
        let start = self.start().min(text.len());
        let end = self.end().min(text.len());
        let empty = start == end;
        LineIndex::lines(text)
            .filter(move |line| !empty && line.end >= start && line.start <= end)
            .map(move |line| line.start.max(start)..line.end.min(end))
    }
}

/// One row of selection highlight, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SelectionRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
