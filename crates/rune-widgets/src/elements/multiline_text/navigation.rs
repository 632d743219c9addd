use rune_text::{CursorMovement, MovementDirection, MovementUnit, Point};

use super::MultilineText;

impl MultilineText {
    /// Move the caret and then either extend the selection to it or collapse
    /// the selection onto it.
    pub fn move_caret(&mut self, direction: MovementDirection, unit: MovementUnit, extend: bool) {
        let target = CursorMovement::resolve(
            self.geometry.as_ref(),
            self.buffer.units(),
            self.caret.index(),
            direction,
            unit,
        );
        self.set_caret(target);
        self.follow_caret(extend);
    }

    /// `caret + delta`, clamped.
    pub fn move_by(&mut self, delta: isize) {
        let target = CursorMovement::move_by(self.buffer.len(), self.caret.index(), delta);
        self.set_caret(target);
    }

    pub fn move_to_previous_word_boundary(&mut self) {
        let target = CursorMovement::previous_word_boundary(self.buffer.units(), self.caret.index());
        self.set_caret(target);
    }

    pub fn move_to_next_word_boundary(&mut self) {
        let target = CursorMovement::next_word_boundary(self.buffer.units(), self.caret.index());
        self.set_caret(target);
    }

    pub fn move_line_up(&mut self) {
        let target =
            CursorMovement::line_up(self.geometry.as_ref(), self.buffer.units(), self.caret.index());
        self.set_caret(target);
    }

    pub fn move_line_down(&mut self) {
        let target = CursorMovement::line_down(
            self.geometry.as_ref(),
            self.buffer.units(),
            self.caret.index(),
        );
        self.set_caret(target);
    }

    /// Select the whole buffer and park the caret at its end.
    pub fn select_all(&mut self) {
        let len = self.buffer.len();
        self.selection.select_all(len);
        self.set_caret(len);
    }

    /// Replace the selection with `anchor..active` (clamped) and put the caret
    /// on the active end.
    pub fn set_selection(&mut self, anchor: usize, active: usize) {
        let len = self.buffer.len();
        self.selection = rune_text::Selection::new(anchor.min(len), active.min(len));
        self.set_caret(active);
    }

    pub(super) fn follow_caret(&mut self, extend: bool) {
        if extend {
            self.selection.extend_to(self.caret.index());
        } else {
            self.selection.reset(self.caret.index());
        }
    }

    /// Index under a viewport-space point, using the same box alignment and
    /// scroll offset the renderer draws with.
    pub fn index_at(&self, x: f32, y: f32) -> usize {
        let block = self.text_block_offset();
        let local = Point::new(x - self.rect.x - block.x, y - self.rect.y - block.y);
        self.index_from_offset(local)
    }
}
