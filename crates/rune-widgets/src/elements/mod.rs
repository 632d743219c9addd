//! Interactive text elements and the state helpers they share.

pub mod caret;
pub mod key_repeat;
pub mod multiline_text;
pub mod scroll;

pub use caret::CaretBlink;
pub use key_repeat::KeyRepeat;
pub use multiline_text::{MultilineRender, MultilineText};
pub use scroll::{ScrollSync, ScrollThumb};
