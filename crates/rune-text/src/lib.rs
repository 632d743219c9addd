//! rune-text: text engine for editable multiline widgets.
//!
//! - [`buffer`]: UTF-16 code-unit storage with clamped indexing
//! - [`metrics`]: the text measurement contract and a monospace adapter
//! - [`layout`]: logical lines, caret geometry, movement rules and selection
//! - [`clipboard`]: clipboard services and the copy/paste worker bridge

pub mod buffer;
pub mod clipboard;
pub mod layout;
pub mod metrics;

pub use buffer::{LINE_BREAK, SPACE, TextBuffer};
pub use clipboard::{
    ClipboardBridge, ClipboardError, ClipboardService, MemoryClipboard, SystemClipboard,
};
pub use layout::{
    Alignment, Caret, CursorMovement, CursorRect, HorizontalAlign, LayoutContext, LineIndex,
    LogicalLineGeometry, MovementDirection, MovementUnit, Point, Rect, Selection, SelectionRect,
    TextGeometry, VerticalAlign,
};
pub use metrics::{FontId, MonospaceMetrics, TextMetrics, TextSize};
