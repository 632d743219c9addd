//! rune-widgets: interactive text widgets built on rune-text.

pub mod elements;
pub mod event_handler;

pub use elements::{CaretBlink, KeyRepeat, MultilineRender, MultilineText, ScrollSync, ScrollThumb};
pub use event_handler::{
    EventHandler, EventResult, KeyboardEvent, MouseClickEvent, MouseMoveEvent, ScrollEvent,
};
