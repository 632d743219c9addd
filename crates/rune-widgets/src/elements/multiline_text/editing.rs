use std::thread::JoinHandle;

use super::MultilineText;

impl MultilineText {
    /// Replace the selection (if any) with `text` and put the caret after it.
    pub fn insert(&mut self, text: &str) {
        self.erase_selection();
        let at = self.caret.index();
        let inserted = self.buffer.insert(at, text);
        self.refresh_layout();
        self.set_caret(at + inserted);
        self.selection.reset(self.caret.index());
    }

    /// Remove the selected range and collapse onto its start. Returns `false`
    /// without touching anything when the selection is empty.
    pub fn erase_selection(&mut self) -> bool {
        let Some(start) = self.selection.erase(&mut self.buffer) else {
            return false;
        };
        self.refresh_layout();
        self.set_caret(start);
        true
    }

    /// Erase the selection, or the code unit before the caret.
    pub fn backspace(&mut self) {
        if self.erase_selection() {
            return;
        }
        let at = self.caret.index();
        if at == 0 {
            return;
        }
        self.buffer.remove(at - 1..at);
        self.refresh_layout();
        self.set_caret(at - 1);
        self.selection.reset(self.caret.index());
    }

    /// Erase the selection, or the code unit after the caret.
    pub fn delete(&mut self) {
        if self.erase_selection() {
            return;
        }
        let at = self.caret.index();
        if at >= self.buffer.len() {
            return;
        }
        self.buffer.remove(at..at + 1);
        self.refresh_layout();
        self.set_caret(at);
        self.selection.reset(self.caret.index());
    }

    /// Replace the whole buffer. The caret keeps its index where possible.
    ///
    /// With the scrollbar hidden and the text pinned to an edge, the pinned
    /// offset wins over scrolling the caret into view.
    pub fn replace_all(&mut self, text: &str) {
        self.buffer.replace_all(text);
        self.refresh_layout();
        self.blink.reset_manual();
        if !self.scroll.is_pinned() {
            self.ensure_caret_visible();
        }
        self.selection.reset(self.caret.index());
    }

    pub fn set_text(&mut self, text: &str) {
        self.replace_all(text);
    }

    /// Add `text` at the end of the buffer without moving the caret.
    pub fn append_text(&mut self, text: &str) {
        let end = self.buffer.len();
        self.buffer.insert(end, text);
        self.refresh_layout();
    }

    pub fn append_line(&mut self) {
        let end = self.buffer.len();
        self.buffer.insert_units(end, &[rune_text::LINE_BREAK]);
        self.refresh_layout();
    }

    pub fn clear(&mut self) {
        self.replace_all("");
    }

    // ===== Clipboard =====

    /// Hand the selected text to the clipboard without waiting.
    ///
    /// Returns the worker handle, or `None` when nothing is selected.
    pub fn copy_selection(&self) -> Option<JoinHandle<()>> {
        if self.selection.is_empty() {
            return None;
        }
        let text = self.selection.text(&self.buffer);
        tracing::debug!(len = text.len(), "copy selection");
        self.clipboard.copy_detached(&text)
    }

    pub fn cut_selection(&mut self) -> Option<JoinHandle<()>> {
        let handle = self.copy_selection();
        self.erase_selection();
        handle
    }

    /// Replace the selection with clipboard text, blocking until it arrives.
    pub fn paste(&mut self) {
        self.erase_selection();
        let text = self.clipboard.paste_blocking();
        tracing::debug!(len = text.len(), "paste");
        self.insert(&text);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rune_config::RuneConfig;
    use rune_text::{Alignment, MemoryClipboard, MonospaceMetrics, Rect};

    use super::*;

    fn widget_with_clipboard(text: &str, clipboard: Arc<MemoryClipboard>) -> MultilineText {
        let mut config = RuneConfig::default();
        config.multiline.selectable = true;
        config.text.box_align = Alignment::LeftTop;
        MultilineText::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &config,
            Arc::new(MonospaceMetrics::new(10.0, 20.0)),
            clipboard,
        )
        .with_text(text)
    }

    fn widget(text: &str) -> MultilineText {
        widget_with_clipboard(text, Arc::new(MemoryClipboard::new()))
    }

    #[test]
    fn test_insert_at_caret() {
        let mut w = widget("held");
        w.set_caret(3);
        w.insert("lo wor");
        assert_eq!(w.text(), "hello word");
        assert_eq!(w.caret_index(), 9);
        assert!(w.selection().is_empty());
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut w = widget("hello world");
        w.set_selection(0, 5);
        w.insert("howdy");
        assert_eq!(w.text(), "howdy world");
        assert_eq!(w.caret_index(), 5);
        assert_eq!(w.selection().range(), 5..5);
    }

    #[test]
    fn test_insert_then_erase_round_trip() {
        let mut w = widget("abcdef");
        w.set_caret(2);
        w.insert("XYZ");
        w.set_selection(2, 5);
        assert!(w.erase_selection());
        assert_eq!(w.text(), "abcdef");
        assert_eq!(w.caret_index(), 2);
    }

    #[test]
    fn test_erase_selection_extracts_and_repositions() {
        let mut w = widget("hello world");
        w.set_selection(0, 5);
        assert_eq!(w.selected_text(), "hello");
        assert!(w.erase_selection());
        assert_eq!(w.text(), " world");
        assert_eq!(w.caret_index(), 0);
        assert!(!w.erase_selection());
        assert_eq!(w.text(), " world");
    }

    #[test]
    fn test_backspace_and_delete_edges() {
        let mut w = widget("ab");
        w.set_caret(0);
        w.backspace();
        assert_eq!(w.text(), "ab");
        w.delete();
        assert_eq!(w.text(), "b");
        assert_eq!(w.caret_index(), 0);

        w.set_caret(1);
        w.delete();
        assert_eq!(w.text(), "b");
        w.backspace();
        assert_eq!(w.text(), "");
        assert_eq!(w.caret_index(), 0);
    }

    #[test]
    fn test_backspace_erases_selection_only() {
        let mut w = widget("abcdef");
        w.set_selection(4, 1);
        w.backspace();
        assert_eq!(w.text(), "aef");
        assert_eq!(w.caret_index(), 1);
    }

    #[test]
    fn test_replace_all_clamps_caret() {
        let mut w = widget("a long line of text");
        w.set_selection(2, 12);
        w.replace_all("tiny");
        assert_eq!(w.caret_index(), 4);
        assert_eq!(w.selection().range(), 4..4);
        w.clear();
        assert_eq!(w.caret_index(), 0);
        assert!(w.is_empty());
    }

    #[test]
    fn test_replace_all_keeps_bottom_pin() {
        let mut config = RuneConfig::default();
        config.multiline.selectable = true;
        config.multiline.show_scrollbar = false;
        config.text.text_align = Alignment::LeftBottom;
        let text = vec!["line"; 20].join("\n");
        let mut w = MultilineText::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &config,
            Arc::new(MonospaceMetrics::new(10.0, 20.0)),
            Arc::new(MemoryClipboard::new()),
        )
        .with_text(&text);
        // 20 lines of 20px in a 100px viewport.
        assert_eq!(w.scroll().max_offset(), 300.0);
        assert_eq!(w.scroll_offset(), 300.0);
        assert_eq!(w.caret_index(), 0);

        w.append_line();
        w.append_text("more");
        assert_eq!(w.scroll_offset(), 320.0);

        w.set_text(&text);
        assert_eq!(w.scroll_offset(), 300.0);

        w.clear();
        assert_eq!(w.scroll_offset(), 0.0);
    }

    #[test]
    fn test_replace_all_scrolls_caret_into_view_with_scrollbar() {
        let mut w = widget(&vec!["line"; 20].join("\n"));
        w.set_caret(w.text().len());
        assert_eq!(w.scroll_offset(), 300.0);
        w.replace_all(&vec!["row"; 20].join("\n"));
        assert_eq!(w.caret_index(), 79);
        assert_eq!(w.scroll_offset(), 300.0);
        w.replace_all("short");
        assert_eq!(w.caret_index(), 5);
        assert_eq!(w.scroll_offset(), 0.0);
    }

    #[test]
    fn test_append_keeps_caret() {
        let mut w = widget("log");
        w.set_caret(1);
        w.append_line();
        w.append_text("next");
        assert_eq!(w.text(), "log\nnext");
        assert_eq!(w.caret_index(), 1);
    }

    #[test]
    fn test_copy_cut_paste() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let mut w = widget_with_clipboard("one\ntwo three", clipboard.clone());

        assert!(w.copy_selection().is_none());

        w.set_selection(0, 7);
        w.copy_selection().unwrap().join().unwrap();
        assert_eq!(clipboard.contents(), "one\r\ntwo");

        w.set_selection(7, 13);
        w.cut_selection().unwrap().join().unwrap();
        assert_eq!(w.text(), "one\ntwo");
        assert_eq!(clipboard.contents(), " three");

        w.set_caret(3);
        w.paste();
        assert_eq!(w.text(), "one three\ntwo");
        assert_eq!(w.caret_index(), 9);
    }

    #[test]
    fn test_paste_normalizes_crlf() {
        let clipboard = Arc::new(MemoryClipboard::with_text("a\r\nb"));
        let mut w = widget_with_clipboard("", clipboard);
        w.paste();
        assert_eq!(w.text(), "a \nb");
        assert_eq!(w.caret_index(), 4);
    }
}
