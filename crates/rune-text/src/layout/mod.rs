pub mod align;
pub mod cursor;
pub mod cursor_movement;
pub mod geometry;
pub mod line_index;
pub mod selection;

pub use align::{Alignment, HorizontalAlign, VerticalAlign};
pub use cursor::{Caret, CursorRect};
pub use cursor_movement::{CursorMovement, MovementDirection, MovementUnit};
pub use geometry::{LayoutContext, LogicalLineGeometry, TextGeometry};
pub use hit_test::{Point, Rect};
pub use line_index::LineIndex;
pub use selection::{Selection, SelectionRect};
