//! Text measurement boundary.
//!
//! The navigation engine never rasterizes glyphs. It asks a [`TextMetrics`]
//! implementation for the pixel extent of a run of code units and derives all
//! caret and line geometry from those answers.

use crate::buffer::LINE_BREAK;

/// Identifies a font known to the host's text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontId(pub String);

impl FontId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for FontId {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Measured extent of a run of text in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

impl TextSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Converts text into a pixel extent for a font and scale.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same size, otherwise caret and line math drift between calls.
///
/// Contract for multi-line input: `height` covers every line, including an
/// empty trailing line after a final break, and measuring an empty run yields
/// zero width and the height of one line.
pub trait TextMetrics: Send + Sync {
    fn measure(&self, text: &[u16], font: &FontId, scale: f32) -> TextSize;
}

/// Fixed-advance metrics.
///
/// Every code unit advances by `advance * scale` and every line is
/// `line_height * scale` tall. Useful for terminal-like hosts, headless tools
/// and deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per code unit at scale 1.0.
    pub advance: f32,
    /// Line height at scale 1.0.
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &[u16], _font: &FontId, scale: f32) -> TextSize {
        let mut lines = 1usize;
        let mut widest = 0usize;
        let mut current = 0usize;
        for &unit in text {
            if unit == LINE_BREAK {
                widest = widest.max(current);
                current = 0;
                lines += 1;
            } else {
                current += 1;
            }
        }
        widest = widest.max(current);

        TextSize {
            width: widest as f32 * self.advance * scale,
            height: lines as f32 * self.line_height * scale,
        }
    }
}
