/// The single insertion point of an editable text, as a code-unit offset.
///
/// The caret never stores an index past the buffer end: every write clamps
/// against the length supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    index: usize,
}

impl Caret {
    /// Create a caret at the start of the text.
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to `index` clamped into `0..=len`. Returns `true` if the caret moved.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        let clamped = index.min(len);
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }

    /// Re-clamp after the text shrank underneath the caret.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len);
    }
}

/// Visual rectangle for drawing the caret.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorRect {
    /// X position in pixels.
    pub x: f32,
    /// Y position in pixels (top of caret).
    pub y: f32,
    /// Width in pixels (typically 1-2px).
    pub width: f32,
    /// Height in pixels (typically line height).
    pub height: f32,
}

impl CursorRect {
    /// Create a new cursor rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_set_reports_movement() {
        let mut caret = Caret::new();
        assert_eq!(caret.index(), 0);
        assert!(caret.set(3, 10));
        assert!(!caret.set(3, 10));
        assert!(caret.set(50, 10));
        assert_eq!(caret.index(), 10);
    }

    #[test]
    fn test_caret_clamp_after_shrink() {
        let mut caret = Caret::new();
        caret.set(8, 8);
        caret.clamp(5);
        assert_eq!(caret.index(), 5);
        caret.clamp(20);
        assert_eq!(caret.index(), 5);
    }
}
