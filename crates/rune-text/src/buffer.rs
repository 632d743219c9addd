use core::fmt;
use core::ops::Range;

/// The single designated line-break code unit.
pub const LINE_BREAK: u16 = b'\n' as u16;

/// Space code unit, used together with [`LINE_BREAK`] as a word boundary.
pub const SPACE: u16 = b' ' as u16;

/// Mutable text storage addressed in UTF-16 code units.
///
/// Every index handed to or returned from the buffer is a code-unit offset in
/// `0..=len()`. Out-of-range indices are clamped rather than rejected, so
/// callers can never observe a panic from a stale caret or selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    units: Vec<u16>,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Number of code units in the buffer.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Raw code units.
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Clamp an index into `0..=len()`.
    pub fn clamp(&self, idx: usize) -> usize {
        idx.min(self.units.len())
    }

    /// Clamp a range so that `start <= end <= len()`.
    pub fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let end = self.clamp(range.end);
        let start = range.start.min(end);
        start..end
    }

    /// Code units in `range`, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> &[u16] {
        &self.units[self.clamp_range(range)]
    }

    /// Decode `range` into a `String`, replacing unpaired surrogates.
    pub fn substring(&self, range: Range<usize>) -> String {
        String::from_utf16_lossy(self.slice(range))
    }

    /// Insert `text` at `idx` (clamped). Returns the number of code units inserted.
    pub fn insert(&mut self, idx: usize, text: &str) -> usize {
        let encoded: Vec<u16> = text.encode_utf16().collect();
        self.insert_units(idx, &encoded)
    }

    /// Insert raw code units at `idx` (clamped).
    pub fn insert_units(&mut self, idx: usize, units: &[u16]) -> usize {
        let at = self.clamp(idx);
        self.units.splice(at..at, units.iter().copied());
        units.len()
    }

    /// Remove `range` (clamped) and return the removed code units.
    pub fn remove(&mut self, range: Range<usize>) -> Vec<u16> {
        let range = self.clamp_range(range);
        self.units.drain(range).collect()
    }

    /// Replace the whole content.
    pub fn replace_all(&mut self, text: &str) {
        self.units.clear();
        self.units.extend(text.encode_utf16());
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
