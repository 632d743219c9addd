//! Selectable, editable multiline text widget.
//!
//! The widget owns the text buffer, the caret, the selection and the vertical
//! scroll offset, and keeps them consistent across edits, navigation and
//! resizing. Measurement, clipboard and platform input are collaborators
//! injected at construction.
//!
//! Submodules split the behavior:
//! - `navigation`: caret movement and pointer hit testing
//! - `editing`: buffer mutations and clipboard operations
//! - `input`: the [`EventHandler`](crate::event_handler::EventHandler)
//!   implementation that routes input to the two above

mod editing;
mod input;
mod navigation;

use std::sync::Arc;
use std::time::Duration;

use rune_config::RuneConfig;
use rune_text::{
    Alignment, Caret, ClipboardBridge, ClipboardService, CursorRect, FontId, LayoutContext,
    LogicalLineGeometry, Point, Rect, Selection, SelectionRect, TextBuffer, TextGeometry,
    TextMetrics, TextSize,
};

use crate::elements::caret::CaretBlink;
use crate::elements::key_repeat::KeyRepeat;
use crate::elements::scroll::ScrollSync;

/// Caret stroke width in pixels.
const CARET_WIDTH: f32 = 1.0;

/// Everything a renderer needs to draw the widget for one frame.
///
/// All coordinates are in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct MultilineRender {
    /// Top-left of the text block with box alignment and scroll applied.
    pub text_origin: Point,
    /// Area the text is clipped to (the widget minus a visible scrollbar).
    pub clip: Rect,
    /// Present while focused, selectable and in the visible blink phase.
    pub caret: Option<CursorRect>,
    pub selection: Vec<SelectionRect>,
    pub scrollbar_thumb: Option<Rect>,
    pub content_size: TextSize,
}

/// Multiline text control with caret, selection and scrolling.
pub struct MultilineText {
    rect: Rect,
    buffer: TextBuffer,
    caret: Caret,
    selection: Selection,
    scroll: ScrollSync,
    key_repeat: KeyRepeat,
    blink: CaretBlink,
    clipboard: ClipboardBridge,
    metrics: Arc<dyn TextMetrics>,
    geometry: Box<dyn TextGeometry>,

    font: FontId,
    scale: f32,
    text_align: Alignment,
    box_align: Alignment,
    selectable: bool,
    editable: bool,
    scrollbar_width: f32,
    scroll_sensitivity: f32,

    focused: bool,
    dragging: bool,
}

impl MultilineText {
    /// Create an empty widget occupying `rect` (viewport coordinates).
    pub fn new(
        rect: Rect,
        config: &RuneConfig,
        metrics: Arc<dyn TextMetrics>,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        let text = &config.text;
        let multiline = &config.multiline;
        let mut widget = Self {
            rect,
            buffer: TextBuffer::new(),
            caret: Caret::new(),
            selection: Selection::default(),
            scroll: ScrollSync::new(multiline.show_scrollbar, text.text_align.vertical()),
            key_repeat: KeyRepeat::new(multiline.repeat_delay()),
            blink: CaretBlink::new(multiline.caret_blink(), false),
            clipboard: ClipboardBridge::new(clipboard),
            metrics,
            geometry: Box::new(LogicalLineGeometry),
            font: FontId::new(text.font.clone()),
            scale: text.scale,
            text_align: text.text_align,
            box_align: text.box_align,
            selectable: multiline.selectable,
            editable: multiline.editable,
            scrollbar_width: multiline.scrollbar_width,
            scroll_sensitivity: multiline.scroll_sensitivity,
            focused: false,
            dragging: false,
        };
        widget.refresh_layout();
        widget
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.replace_all(text);
        self
    }

    /// Swap the line-boundary and caret-position strategy.
    pub fn with_geometry(mut self, geometry: Box<dyn TextGeometry>) -> Self {
        self.set_geometry(geometry);
        self
    }

    // ===== Accessors =====

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn caret_index(&self) -> usize {
        self.caret.index()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_text(&self) -> String {
        self.selection.text(&self.buffer)
    }

    pub fn scroll(&self) -> &ScrollSync {
        &self.scroll
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn font(&self) -> &FontId {
        &self.font
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn text_align(&self) -> Alignment {
        self.text_align
    }

    pub fn box_align(&self) -> Alignment {
        self.box_align
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_caret_visible(&self) -> bool {
        self.focused && self.selectable && self.blink.is_visible()
    }

    // ===== Runtime configuration =====

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.refresh_layout();
    }

    pub fn set_geometry(&mut self, geometry: Box<dyn TextGeometry>) {
        self.geometry = geometry;
        self.refresh_layout();
    }

    pub fn set_font(&mut self, font: FontId) {
        self.font = font;
        self.refresh_layout();
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.refresh_layout();
    }

    pub fn set_text_align(&mut self, align: Alignment) {
        self.text_align = align;
        self.scroll.set_pin(align.vertical());
        self.refresh_layout();
    }

    pub fn set_box_align(&mut self, align: Alignment) {
        self.box_align = align;
        self.refresh_layout();
    }

    /// Turning selection off also drops any drag and selection in progress.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
        if !selectable {
            self.dragging = false;
            self.selection.reset(self.caret.index());
        }
        self.refresh_layout();
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn set_show_scrollbar(&mut self, show: bool) {
        self.scroll.set_show_scrollbar(show);
        self.refresh_layout();
    }

    pub fn set_repeat_delay(&mut self, delay: Duration) {
        self.key_repeat.set_delay(delay);
    }

    pub fn set_scroll_sensitivity(&mut self, pixels_per_step: f32) {
        self.scroll_sensitivity = pixels_per_step;
    }

    /// Advance the caret blink timer by one frame.
    pub fn update(&mut self, delta: Duration) {
        self.blink.update(delta, self.focused && self.selectable);
    }

    // ===== Caret controller =====

    /// Move the caret to `idx` (clamped) and scroll it into view.
    ///
    /// Every caret write goes through here. The selection is left alone;
    /// callers reset or extend it afterwards.
    pub fn set_caret(&mut self, idx: usize) {
        self.caret.set(idx, self.buffer.len());
        self.blink.reset_manual();
        self.ensure_caret_visible();
        tracing::trace!(caret = self.caret.index(), "caret moved");
    }

    /// Scroll by the minimal amount that keeps the whole caret inside the
    /// viewport.
    pub fn ensure_caret_visible(&mut self) {
        let cx = self.layout_context();
        let caret_height = self.geometry.caret_height(&cx);
        let top = self.text_block_offset().y + self.caret_offset(self.caret.index()).y;
        let limit = self.rect.h - caret_height;

        if top < 0.0 {
            self.scroll.change_by(top);
        } else if top > limit {
            self.scroll.change_by(top - limit);
        }
    }

    /// Caret position of `idx` relative to the text block, scroll applied.
    pub fn caret_offset(&self, idx: usize) -> Point {
        let cx = self.layout_context();
        let offset = self.geometry.caret_offset(self.buffer.units(), idx, &cx);
        offset.offset(0.0, -self.scroll.offset())
    }

    /// Index nearest to `point`, given relative to the text block with scroll
    /// applied (the inverse of [`Self::caret_offset`]).
    pub fn index_from_offset(&self, point: Point) -> usize {
        let cx = self.layout_context();
        let unscrolled = point.offset(0.0, self.scroll.offset());
        self.geometry
            .index_from_point(self.buffer.units(), unscrolled, &cx)
    }

    // ===== Layout =====

    fn layout_context(&self) -> LayoutContext<'_> {
        LayoutContext::new(self.metrics.as_ref(), &self.font, self.scale)
            .with_align(self.text_align.horizontal())
    }

    pub fn content_size(&self) -> TextSize {
        let cx = self.layout_context();
        self.geometry.content_size(self.buffer.units(), &cx)
    }

    /// Width available to text: the widget minus a visible scrollbar.
    fn drawable_width(&self) -> f32 {
        if self.scroll.is_scrollbar_visible() {
            (self.rect.w - self.scrollbar_width).max(0.0)
        } else {
            self.rect.w
        }
    }

    /// Offset of the text block inside the widget from box alignment. Only
    /// applies along an axis where the content is smaller than the widget.
    fn text_block_offset(&self) -> Point {
        let content = self.content_size();
        let width = self.drawable_width();
        let x = if content.width < width {
            (width - content.width) * self.box_align.horizontal().factor()
        } else {
            0.0
        };
        let y = if content.height < self.rect.h {
            (self.rect.h - content.height) * self.box_align.vertical().factor()
        } else {
            0.0
        };
        Point::new(x, y)
    }

    /// Recompute scroll extents after content, font or size changes and pull
    /// caret and selection back into range.
    pub fn refresh_layout(&mut self) {
        let len = self.buffer.len();
        self.caret.clamp(len);
        self.selection.clamp(len);
        let content = self.content_size();
        self.scroll.set_extents(content.height, self.rect.h);
        tracing::debug!(
            len,
            content_height = content.height,
            viewport_height = self.rect.h,
            offset = self.scroll.offset(),
            "multiline layout refreshed"
        );
    }

    // ===== Rendering =====

    pub fn render_data(&self) -> MultilineRender {
        let cx = self.layout_context();
        let block = self.text_block_offset();
        let origin = Point::new(
            self.rect.x + block.x,
            self.rect.y + block.y - self.scroll.offset(),
        );
        let line_height = self.geometry.caret_height(&cx);
        let units = self.buffer.units();

        let caret = self.is_caret_visible().then(|| {
            let at = self.geometry.caret_offset(units, self.caret.index(), &cx);
            CursorRect::new(origin.x + at.x, origin.y + at.y, CARET_WIDTH, line_height)
        });

        let break_width = cx.measure(&[rune_text::SPACE]).width;
        let selection_end = self.selection.end();
        let selection = self
            .selection
            .line_ranges(units)
            .filter_map(|range| {
                let start = self.geometry.caret_offset(units, range.start, &cx);
                let end = self.geometry.caret_offset(units, range.end, &cx);
                let mut width = end.x - start.x;
                if selection_end > range.end {
                    width += break_width;
                }
                (width > 0.0).then(|| {
                    SelectionRect::new(origin.x + start.x, origin.y + start.y, width, line_height)
                })
            })
            .collect();

        let scrollbar_thumb = self.scroll.thumb(self.rect.h).map(|thumb| {
            Rect::new(
                self.rect.right() - self.scrollbar_width,
                self.rect.y + thumb.offset,
                self.scrollbar_width,
                thumb.length,
            )
        });

        MultilineRender {
            text_origin: origin,
            clip: Rect::new(self.rect.x, self.rect.y, self.drawable_width(), self.rect.h),
            caret,
            selection,
            scrollbar_thumb,
            content_size: self.content_size(),
        }
    }
}

impl std::fmt::Debug for MultilineText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultilineText")
            .field("rect", &self.rect)
            .field("len", &self.buffer.len())
            .field("caret", &self.caret)
            .field("selection", &self.selection)
            .field("scroll", &self.scroll)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rune_text::{MemoryClipboard, MonospaceMetrics};

    fn widget(text: &str) -> MultilineText {
        let mut config = RuneConfig::default();
        config.multiline.selectable = true;
        config.text.box_align = Alignment::LeftTop;
        MultilineText::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &config,
            Arc::new(MonospaceMetrics::new(10.0, 20.0)),
            Arc::new(MemoryClipboard::new()),
        )
        .with_text(text)
    }

    #[test]
    fn test_set_caret_clamps_and_scrolls() {
        let mut w = widget("a\nb\nc\nd\ne\nf\ng\nh");
        assert_eq!(w.scroll.content_height(), 160.0);

        w.set_caret(500);
        assert_eq!(w.caret_index(), 15);
        // Caret top at 140 must fit above 100 - 20.
        assert_eq!(w.scroll_offset(), 60.0);

        w.set_caret(0);
        assert_eq!(w.scroll_offset(), 0.0);
    }

    #[test]
    fn test_caret_offset_applies_scroll() {
        let mut w = widget("a\nb\nc\nd\ne\nf\ng\nh");
        w.set_caret(14);
        assert_eq!(w.caret_offset(14), Point::new(0.0, 80.0));
        assert_eq!(w.index_from_offset(Point::new(0.0, 80.0)), 14);
    }

    #[test]
    fn test_box_alignment_centers_small_content() {
        let mut w = widget("ab");
        w.set_box_align(Alignment::CenterCenter);
        let render = w.render_data();
        assert_eq!(render.text_origin, Point::new(90.0, 40.0));
    }

    #[test]
    fn test_render_data_caret_and_selection() {
        let mut w = widget("hello\nworld");
        w.set_caret(8);
        assert!(w.render_data().caret.is_none());

        w.focused = true;
        w.selection = Selection::new(3, 8);
        let render = w.render_data();
        assert_eq!(render.caret, Some(CursorRect::new(20.0, 20.0, 1.0, 20.0)));
        assert_eq!(
            render.selection,
            vec![
                SelectionRect::new(30.0, 0.0, 30.0, 20.0),
                SelectionRect::new(0.0, 20.0, 20.0, 20.0),
            ]
        );
        assert!(render.scrollbar_thumb.is_none());
    }

    #[test]
    fn test_scrollbar_narrows_clip() {
        let w = widget("1\n2\n3\n4\n5\n6\n7\n8");
        let render = w.render_data();
        assert_eq!(render.clip, Rect::new(0.0, 0.0, 188.0, 100.0));
        let thumb = render.scrollbar_thumb.unwrap();
        assert_eq!(thumb.x, 188.0);
        assert_eq!(thumb.h, 62.5);
    }

    #[test]
    fn test_set_rect_reclamps_scroll() {
        let mut w = widget("1\n2\n3\n4\n5\n6\n7\n8");
        w.set_caret(15);
        assert_eq!(w.scroll_offset(), 60.0);
        w.set_rect(Rect::new(0.0, 0.0, 200.0, 400.0));
        assert_eq!(w.scroll_offset(), 0.0);
        assert!(!w.scroll().is_scrollbar_visible());
    }
}
