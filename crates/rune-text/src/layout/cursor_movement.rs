use crate::buffer::{LINE_BREAK, SPACE};
use crate::layout::TextGeometry;

/// Direction for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Unit of caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementUnit {
    /// One code unit horizontally, one logical line vertically.
    Character,
    /// To the previous word start / next word end.
    Word,
    /// To the start / end of the current logical line.
    Line,
    /// To the start / end of the text.
    Document,
}

fn is_word_boundary(unit: u16) -> bool {
    unit == SPACE || unit == LINE_BREAK
}

/// Caret movement rules over a code-unit slice.
///
/// Every function returns an index in `0..=text.len()` regardless of the
/// input index, so callers can feed stale positions safely.
pub struct CursorMovement;

impl CursorMovement {
    /// Resolve a `(direction, unit)` pair to a target index.
    pub fn resolve(
        geometry: &dyn TextGeometry,
        text: &[u16],
        idx: usize,
        direction: MovementDirection,
        unit: MovementUnit,
    ) -> usize {
        use MovementDirection as D;
        use MovementUnit as U;
        match (direction, unit) {
            (D::Left, U::Character) => Self::move_by(text.len(), idx, -1),
            (D::Right, U::Character) => Self::move_by(text.len(), idx, 1),
            (D::Left, U::Word) => Self::previous_word_boundary(text, idx),
            (D::Right, U::Word) => Self::next_word_boundary(text, idx),
            (D::Left, U::Line) => geometry.line_start(text, idx),
            (D::Right, U::Line) => geometry.line_end(text, idx),
            (D::Left | D::Up, U::Document) => 0,
            (D::Right | D::Down, U::Document) => text.len(),
            (D::Up, _) => Self::line_up(geometry, text, idx),
            (D::Down, _) => Self::line_down(geometry, text, idx),
        }
    }

    /// `idx + delta` clamped into `0..=len`.
    pub fn move_by(len: usize, idx: usize, delta: isize) -> usize {
        let idx = idx.min(len);
        if delta < 0 {
            idx.saturating_sub(delta.unsigned_abs())
        } else {
            idx.saturating_add(delta as usize).min(len)
        }
    }

    /// Start of the word before `idx`: one past the nearest space or break
    /// that precedes `idx - 1`, or 0.
    ///
    /// A boundary directly left of the caret is skipped so repeated calls keep
    /// walking backwards instead of sticking in place.
    pub fn previous_word_boundary(text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        if idx == 0 {
            return 0;
        }
        text[..idx - 1]
            .iter()
            .rposition(|&unit| is_word_boundary(unit))
            .map_or(0, |pos| pos + 1)
    }

    /// Nearest space or break strictly after `idx`, or `text.len()`.
    pub fn next_word_boundary(text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        if idx == text.len() {
            return text.len();
        }
        text[idx + 1..]
            .iter()
            .position(|&unit| is_word_boundary(unit))
            .map_or(text.len(), |pos| idx + 1 + pos)
    }

    /// Same column on the previous logical line, clamped to that line's end.
    /// On the first line the caret goes to 0.
    pub fn line_up(geometry: &dyn TextGeometry, text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        let start = geometry.line_start(text, idx);
        if start == 0 {
            return 0;
        }
        let column = idx - start;
        let target_start = geometry.line_start(text, start - 1);
        (target_start + column).min(geometry.line_end(text, target_start))
    }

    /// Same column on the next logical line, clamped to that line's end.
    /// On the last line the caret goes to `text.len()`.
    pub fn line_down(geometry: &dyn TextGeometry, text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        let start = geometry.line_start(text, idx);
        let end = geometry.line_end(text, idx);
        if end >= text.len() {
            return text.len();
        }
        let column = idx - start;
        let target_start = end + 1;
        (target_start + column).min(geometry.line_end(text, target_start))
    }
}
