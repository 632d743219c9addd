use core::ops::Range;

use crate::buffer::LINE_BREAK;

/// Logical line boundaries over a slice of code units.
///
/// A logical line is the run of code units between two [`LINE_BREAK`]s. Soft
/// wrapping is a rendering concern and never changes these boundaries. All
/// queries scan the code units directly and clamp their index argument.
pub struct LineIndex;

impl LineIndex {
    /// Offset of the first code unit of the line containing `idx`: one past
    /// the nearest break strictly before `idx`, or 0.
    pub fn line_start(text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        text[..idx]
            .iter()
            .rposition(|&unit| unit == LINE_BREAK)
            .map_or(0, |pos| pos + 1)
    }

    /// Offset of the next break at or after `idx`, or `text.len()`.
    ///
    /// The returned offset excludes the break itself.
    pub fn line_end(text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        text[idx..]
            .iter()
            .position(|&unit| unit == LINE_BREAK)
            .map_or(text.len(), |pos| idx + pos)
    }

    /// Zero-based logical line number containing `idx`.
    pub fn line_of(text: &[u16], idx: usize) -> usize {
        let idx = idx.min(text.len());
        text[..idx].iter().filter(|&&unit| unit == LINE_BREAK).count()
    }

    /// Number of logical lines. An empty buffer has one empty line.
    pub fn line_count(text: &[u16]) -> usize {
        Self::line_of(text, text.len()) + 1
    }

    /// Iterate the code-unit range of every logical line, breaks excluded.
    pub fn lines(text: &[u16]) -> impl Iterator<Item = Range<usize>> + '_ {
        let mut start = Some(0usize);
        core::iter::from_fn(move || {
            let line_start = start?;
            let end = Self::line_end(text, line_start);
            start = (end < text.len()).then_some(end + 1);
            Some(line_start..end)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_line_start() {
        let text = units("ab\ncdefg\nh");
        assert_eq!(LineIndex::line_start(&text, 0), 0);
        assert_eq!(LineIndex::line_start(&text, 2), 0);
        assert_eq!(LineIndex::line_start(&text, 3), 3);
        assert_eq!(LineIndex::line_start(&text, 8), 3);
        assert_eq!(LineIndex::line_start(&text, 10), 9);
        assert_eq!(LineIndex::line_start(&text, 500), 9);
    }

    #[test]
    fn test_line_end() {
        let text = units("ab\ncdefg\nh");
        assert_eq!(LineIndex::line_end(&text, 0), 2);
        assert_eq!(LineIndex::line_end(&text, 2), 2);
        assert_eq!(LineIndex::line_end(&text, 3), 8);
        assert_eq!(LineIndex::line_end(&text, 9), 10);
        assert_eq!(LineIndex::line_end(&text, 10), 10);
    }

    #[test]
    fn test_empty_text() {
        let text: Vec<u16> = Vec::new();
        assert_eq!(LineIndex::line_start(&text, 0), 0);
        assert_eq!(LineIndex::line_end(&text, 0), 0);
        assert_eq!(LineIndex::line_count(&text), 1);
        assert_eq!(LineIndex::lines(&text).collect::<Vec<_>>(), vec![0..0]);
    }

    #[test]
    fn test_lines_keep_trailing_empty_line() {
        let text = units("ab\n\ncd\n");
        let lines: Vec<_> = LineIndex::lines(&text).collect();
        assert_eq!(lines, vec![0..2, 3..3, 4..6, 7..7]);
        assert_eq!(LineIndex::line_count(&text), 4);
        assert_eq!(LineIndex::line_of(&text, 5), 2);
    }
}
