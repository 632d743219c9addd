use rune_text::VerticalAlign;

/// Smallest scrollbar thumb length in pixels.
const MIN_THUMB_LENGTH: f32 = 16.0;

/// Scrollbar thumb placement along its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThumb {
    /// Distance from the top of the track.
    pub offset: f32,
    pub length: f32,
}

/// Vertical scroll state of a text viewport.
///
/// The offset is always within `0..=max_offset()`. With the scrollbar shown,
/// the offset is free within that range; with it hidden, every content or
/// viewport change snaps the offset to the edge named by the pinning
/// alignment so the content sits against that edge.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    offset: f32,
    content_height: f32,
    viewport_height: f32,
    show_scrollbar: bool,
    pin: VerticalAlign,
    scrollbar_visible: bool,
}

impl ScrollSync {
    pub fn new(show_scrollbar: bool, pin: VerticalAlign) -> Self {
        Self {
            offset: 0.0,
            content_height: 0.0,
            viewport_height: 0.0,
            show_scrollbar,
            pin,
            scrollbar_visible: false,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn is_scrollbar_visible(&self) -> bool {
        self.scrollbar_visible
    }

    pub fn shows_scrollbar(&self) -> bool {
        self.show_scrollbar
    }

    /// Whether content changes snap the offset to a fixed edge.
    pub fn is_pinned(&self) -> bool {
        !self.show_scrollbar && self.pin != VerticalAlign::Center
    }

    /// Largest valid offset. A non-positive viewport shows everything.
    pub fn max_offset(&self) -> f32 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
        self.recalculate();
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.recalculate();
    }

    /// Update both extents with a single recalculation.
    pub fn set_extents(&mut self, content_height: f32, viewport_height: f32) {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height;
        self.recalculate();
    }

    pub fn set_show_scrollbar(&mut self, show: bool) {
        self.show_scrollbar = show;
        self.recalculate();
    }

    pub fn set_pin(&mut self, pin: VerticalAlign) {
        self.pin = pin;
        self.recalculate();
    }

    /// Add `delta` pixels to the offset, clamped.
    pub fn change_by(&mut self, delta: f32) {
        self.set_offset(self.offset + delta);
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
    }

    fn recalculate(&mut self) {
        let fits = self.viewport_height <= 0.0 || self.viewport_height >= self.content_height;
        self.scrollbar_visible = self.show_scrollbar && !fits;

        if self.show_scrollbar {
            self.set_offset(self.offset);
            return;
        }
        match self.pin {
            VerticalAlign::Top => self.set_offset(0.0),
            VerticalAlign::Bottom => self.set_offset(self.content_height),
            VerticalAlign::Center => self.set_offset(self.offset),
        }
    }

    /// Thumb geometry for a track of `track_length` pixels, or `None` while
    /// the scrollbar is hidden.
    pub fn thumb(&self, track_length: f32) -> Option<ScrollThumb> {
        if !self.scrollbar_visible || track_length <= 0.0 || self.content_height <= 0.0 {
            return None;
        }
        let ratio = (self.viewport_height / self.content_height).min(1.0);
        let length = (track_length * ratio).max(MIN_THUMB_LENGTH).min(track_length);
        let max_offset = self.max_offset();
        let progress = if max_offset > 0.0 {
            self.offset / max_offset
        } else {
            0.0
        };
        Some(ScrollThumb {
            offset: (track_length - length) * progress,
            length,
        })
    }
}
