use crate::layout::{HorizontalAlign, LineIndex, Point, hit_test::first_index_where};
use crate::metrics::{FontId, TextMetrics, TextSize};

/// Reference glyph measured to obtain the caret height.
const CARET_PROBE: [u16; 1] = [b'A' as u16];

/// Everything a geometry strategy needs to turn code units into pixels.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub metrics: &'a dyn TextMetrics,
    pub font: &'a FontId,
    pub scale: f32,
    /// Glyph alignment of each line inside the text block.
    pub align: HorizontalAlign,
}

impl<'a> LayoutContext<'a> {
    pub fn new(metrics: &'a dyn TextMetrics, font: &'a FontId, scale: f32) -> Self {
        Self {
            metrics,
            font,
            scale,
            align: HorizontalAlign::Left,
        }
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn measure(&self, text: &[u16]) -> TextSize {
        self.metrics.measure(text, self.font, self.scale)
    }
}

/// Pluggable line-boundary and caret-position strategy.
///
/// Widgets hold one of these per instance. The default methods implement
/// logical-line navigation over [`LineIndex`] with caret positions measured
/// through the [`TextMetrics`] in the context; implementors override only the
/// parts their layout does differently. All points are in text-block
/// coordinates with no scroll applied.
pub trait TextGeometry: Send + Sync {
    fn line_start(&self, text: &[u16], idx: usize) -> usize {
        LineIndex::line_start(text, idx)
    }

    fn line_end(&self, text: &[u16], idx: usize) -> usize {
        LineIndex::line_end(text, idx)
    }

    /// Top-left of the caret placed before code unit `idx`.
    ///
    /// X is the measured width of the line prefix `[line_start, idx)`, shifted
    /// by the line's alignment inside the block. Y is the measured height of
    /// everything before the preceding break.
    fn caret_offset(&self, text: &[u16], idx: usize, cx: &LayoutContext<'_>) -> Point {
        let idx = idx.min(text.len());
        let start = self.line_start(text, idx);

        let mut x = if idx > start {
            cx.measure(&text[start..idx]).width
        } else {
            0.0
        };
        if cx.align != HorizontalAlign::Left {
            let end = self.line_end(text, idx);
            let line_width = cx.measure(&text[start..end]).width;
            let block_width = self.content_size(text, cx).width;
            x += (block_width - line_width).max(0.0) * cx.align.factor();
        }

        let y = if start > 0 {
            cx.measure(&text[..start - 1]).height
        } else {
            0.0
        };

        Point::new(x, y)
    }

    fn caret_height(&self, cx: &LayoutContext<'_>) -> f32 {
        cx.measure(&CARET_PROBE).height
    }

    /// Extent of the whole text block.
    fn content_size(&self, text: &[u16], cx: &LayoutContext<'_>) -> TextSize {
        cx.measure(text)
    }

    /// Index whose caret offset is nearest (Euclidean) to `point`. Ties go to
    /// the lowest index.
    ///
    /// Lines are walked once from the top, each line's top being the sum of
    /// the measured heights above it. Prefix widths grow with the index, so
    /// the column nearest `point.x` is found by bisection. Lines that cannot
    /// beat the best candidate on vertical distance alone are not searched.
    fn index_from_point(&self, text: &[u16], point: Point, cx: &LayoutContext<'_>) -> usize {
        let block_width = if cx.align == HorizontalAlign::Left {
            0.0
        } else {
            self.content_size(text, cx).width
        };

        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        let mut start = 0;
        let mut top = 0.0;
        loop {
            let dy = point.y - top;
            if dy < 0.0 && dy * dy >= best_distance {
                break;
            }
            let end = self.line_end(text, start);
            let line = cx.measure(&text[start..end]);

            if dy * dy < best_distance {
                let shift = (block_width - line.width).max(0.0) * cx.align.factor();
                let x_at = |idx: usize| {
                    let prefix = if idx > start {
                        cx.measure(&text[start..idx]).width
                    } else {
                        0.0
                    };
                    shift + prefix
                };

                let after = first_index_where(start, end, |idx| x_at(idx) >= point.x);
                let mut column = after.min(end);
                let mut x = x_at(column);
                if after > start {
                    let before = x_at(after - 1);
                    if after > end || point.x - before <= x - point.x {
                        column = after - 1;
                        x = before;
                    }
                }
                // Zero-width runs share one x.
                column = first_index_where(start, column, |idx| x_at(idx) >= x);

                let distance = Point::new(x, top).distance_squared(point);
                if distance < best_distance {
                    best = column;
                    best_distance = distance;
                }
            }

            if end >= text.len() {
                break;
            }
            top += line.height;
            start = end + 1;
        }
        best
    }
}

/// Logical-line geometry: each run between breaks is one navigable row.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalLineGeometry;

impl TextGeometry for LogicalLineGeometry {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_caret_offset_first_line() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0);
        let text = units("hello\nworld");
        let geom = LogicalLineGeometry;

        assert_eq!(geom.caret_offset(&text, 0, &cx), Point::new(0.0, 0.0));
        assert_eq!(geom.caret_offset(&text, 3, &cx), Point::new(30.0, 0.0));
        assert_eq!(geom.caret_offset(&text, 5, &cx), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_caret_offset_later_lines() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0);
        let text = units("hello\nworld\n\nx");
        let geom = LogicalLineGeometry;

        assert_eq!(geom.caret_offset(&text, 6, &cx), Point::new(0.0, 20.0));
        assert_eq!(geom.caret_offset(&text, 8, &cx), Point::new(20.0, 20.0));
        // Empty third line.
        assert_eq!(geom.caret_offset(&text, 12, &cx), Point::new(0.0, 40.0));
        assert_eq!(geom.caret_offset(&text, 14, &cx), Point::new(10.0, 60.0));
    }

    #[test]
    fn test_caret_offset_leading_break() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0);
        let text = units("\nab");
        assert_eq!(LogicalLineGeometry.caret_offset(&text, 2, &cx), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_caret_offset_centered_lines() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0).with_align(HorizontalAlign::Center);
        let text = units("abcdef\nab");
        let geom = LogicalLineGeometry;

        // Widest line fills the block, so no shift.
        assert_eq!(geom.caret_offset(&text, 0, &cx).x, 0.0);
        // "ab" is 40px narrower than the block: shifted by half.
        assert_eq!(geom.caret_offset(&text, 7, &cx).x, 20.0);
        assert_eq!(geom.caret_offset(&text, 9, &cx).x, 40.0);
    }

    #[test]
    fn test_index_from_point() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0);
        let text = units("hello\nworld");
        let geom = LogicalLineGeometry;

        assert_eq!(geom.index_from_point(&text, Point::new(22.0, 3.0), &cx), 2);
        assert_eq!(geom.index_from_point(&text, Point::new(14.0, 24.0), &cx), 7);
        // Far right of the first line snaps to its end.
        assert_eq!(geom.index_from_point(&text, Point::new(300.0, 0.0), &cx), 5);
        assert_eq!(geom.index_from_point(&[], Point::new(50.0, 50.0), &cx), 0);
    }

    fn nearest_by_scan(text: &[u16], point: Point, cx: &LayoutContext<'_>) -> usize {
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for idx in 0..=text.len() {
            let distance = LogicalLineGeometry.caret_offset(text, idx, cx).distance_squared(point);
            if distance < best_distance {
                best = idx;
                best_distance = distance;
            }
        }
        best
    }

    #[test]
    fn test_index_from_point_matches_full_scan() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let text = units("short\n\nlonger line here\nmid\n");
        let geom = LogicalLineGeometry;

        for align in [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right] {
            let cx = LayoutContext::new(&metrics, &font, 1.0).with_align(align);
            for y in [-30.0, 0.0, 9.0, 10.0, 25.0, 41.0, 59.0, 75.0, 200.0] {
                for x in [-20.0, 0.0, 5.0, 15.0, 33.0, 64.0, 95.0, 160.0, 400.0] {
                    let point = Point::new(x, y);
                    assert_eq!(
                        geom.index_from_point(&text, point, &cx),
                        nearest_by_scan(&text, point, &cx),
                        "{align:?} at ({x}, {y})"
                    );
                }
            }
        }
    }

    struct CountingMetrics {
        inner: MonospaceMetrics,
        measured_units: AtomicUsize,
    }

    impl TextMetrics for CountingMetrics {
        fn measure(&self, text: &[u16], font: &FontId, scale: f32) -> TextSize {
            self.measured_units.fetch_add(text.len(), Ordering::Relaxed);
            self.inner.measure(text, font, scale)
        }
    }

    #[test]
    fn test_index_from_point_measures_each_line_once() {
        let metrics = CountingMetrics {
            inner: MonospaceMetrics::new(10.0, 20.0),
            measured_units: AtomicUsize::new(0),
        };
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.0).with_align(HorizontalAlign::Center);
        let text = units(&vec!["x".repeat(50); 200].join("\n"));

        // Line 100 starts at 100 * 51; column 25 sits at x = 250.
        let idx = LogicalLineGeometry.index_from_point(&text, Point::new(250.0, 2000.0), &cx);
        assert_eq!(idx, 5125);

        let measured = metrics.measured_units.load(Ordering::Relaxed);
        assert!(measured < 20 * text.len(), "measured {measured} units");
    }

    #[test]
    fn test_caret_height_uses_probe_glyph() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let font = FontId::default();
        let cx = LayoutContext::new(&metrics, &font, 1.5);
        assert_eq!(LogicalLineGeometry.caret_height(&cx), 30.0);
    }
}
