use rune_text::{MovementDirection, MovementUnit};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, ModifiersState};

use super::MultilineText;
use crate::event_handler::{
    EventHandler, EventResult, KeyboardEvent, MouseClickEvent, MouseMoveEvent, ScrollEvent,
};

/// What a key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Move(MovementDirection, MovementUnit),
    SelectAll,
    Copy,
    Cut,
    Paste,
    Backspace,
    Delete,
    NewLine,
}

impl KeyAction {
    fn from_key(key: KeyCode, command: bool) -> Option<Self> {
        use MovementDirection as D;
        use MovementUnit as U;
        let horizontal = if command { U::Word } else { U::Character };
        let edge = if command { U::Document } else { U::Line };
        let action = match key {
            KeyCode::ArrowLeft => KeyAction::Move(D::Left, horizontal),
            KeyCode::ArrowRight => KeyAction::Move(D::Right, horizontal),
            KeyCode::ArrowUp => KeyAction::Move(D::Up, U::Character),
            KeyCode::ArrowDown => KeyAction::Move(D::Down, U::Character),
            KeyCode::Home => KeyAction::Move(D::Left, edge),
            KeyCode::End => KeyAction::Move(D::Right, edge),
            KeyCode::KeyA if command => KeyAction::SelectAll,
            KeyCode::KeyC if command => KeyAction::Copy,
            KeyCode::KeyX if command => KeyAction::Cut,
            KeyCode::KeyV if command => KeyAction::Paste,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Enter | KeyCode::NumpadEnter => KeyAction::NewLine,
            _ => return None,
        };
        Some(action)
    }

    fn mutates(self) -> bool {
        matches!(
            self,
            KeyAction::Cut
                | KeyAction::Paste
                | KeyAction::Backspace
                | KeyAction::Delete
                | KeyAction::NewLine
        )
    }

    /// One-shot shortcuts that ignore OS auto-repeat.
    fn is_shortcut(self) -> bool {
        matches!(
            self,
            KeyAction::SelectAll | KeyAction::Copy | KeyAction::Cut | KeyAction::Paste
        )
    }
}

/// Ctrl on Windows/Linux, Cmd on macOS.
fn command_held(modifiers: ModifiersState) -> bool {
    modifiers.control_key() || modifiers.super_key()
}

impl MultilineText {
    fn apply_key_action(&mut self, action: KeyAction, extend: bool) {
        match action {
            KeyAction::Move(direction, unit) => self.move_caret(direction, unit, extend),
            KeyAction::SelectAll => self.select_all(),
            KeyAction::Copy => {
                // Detached; the handle is not needed here.
                let _ = self.copy_selection();
            }
            KeyAction::Cut => {
                let _ = self.cut_selection();
            }
            KeyAction::Paste => self.paste(),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Delete => self.delete(),
            KeyAction::NewLine => self.insert("\n"),
        }
    }
}

impl EventHandler for MultilineText {
    /// Left press inside starts a drag and places the caret; a press outside
    /// drops the selection. Release ends the drag.
    fn handle_mouse_click(&mut self, event: MouseClickEvent) -> EventResult {
        if event.button != MouseButton::Left || !self.selectable {
            return EventResult::Ignored;
        }

        match event.state {
            ElementState::Pressed => {
                if !self.contains_point(event.x, event.y) {
                    self.selection.reset(self.caret.index());
                    return EventResult::Ignored;
                }
                self.dragging = true;
                let idx = self.index_at(event.x, event.y);
                self.set_caret(idx);
                self.follow_caret(event.modifiers.shift_key());
                EventResult::Handled
            }
            ElementState::Released => {
                if std::mem::take(&mut self.dragging) {
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    fn handle_keyboard(&mut self, event: KeyboardEvent) -> EventResult {
        if event.state != ElementState::Pressed || !self.focused || !self.selectable {
            return EventResult::Ignored;
        }

        let Some(action) = KeyAction::from_key(event.key, command_held(event.modifiers)) else {
            return EventResult::Ignored;
        };
        if action.mutates() && !self.editable {
            return EventResult::Ignored;
        }
        if action.is_shortcut() && event.repeat {
            return EventResult::Handled;
        }
        if !self.key_repeat.accept(event.key, event.timestamp) {
            tracing::trace!(key = ?event.key, "key throttled");
            return EventResult::Handled;
        }

        self.blink.reset_manual();
        tracing::trace!(key = ?event.key, ?action, "key routed");
        self.apply_key_action(action, event.modifiers.shift_key());
        EventResult::Handled
    }

    /// While dragging, inside the widget the caret follows the pointer and
    /// extends the selection. Above or below the widget the view scrolls by
    /// the distance past the edge.
    fn handle_mouse_move(&mut self, event: MouseMoveEvent) -> EventResult {
        if !self.dragging || !self.selectable {
            return EventResult::Ignored;
        }

        if self.contains_point(event.x, event.y) {
            let idx = self.index_at(event.x, event.y);
            self.set_caret(idx);
            self.selection.extend_to(self.caret.index());
            return EventResult::Handled;
        }

        if self.focused {
            if event.y < self.rect.y {
                self.scroll.change_by(event.y - self.rect.y);
            } else if event.y > self.rect.bottom() {
                self.scroll.change_by(event.y - self.rect.bottom());
            }
        }
        EventResult::Handled
    }

    fn handle_scroll(&mut self, event: ScrollEvent) -> EventResult {
        if event.delta == 0.0 || !self.contains_point(event.x, event.y) {
            return EventResult::Ignored;
        }
        self.scroll.change_by(-event.delta * self.scroll_sensitivity);
        EventResult::Handled
    }

    /// Printable text replaces the selection. Control characters are dropped;
    /// line breaks arrive through Enter.
    fn handle_text_input(&mut self, text: &str) -> EventResult {
        if !self.focused || !self.selectable || !self.editable {
            return EventResult::Ignored;
        }
        let printable: String = text.chars().filter(|c| !c.is_control()).collect();
        if printable.is_empty() {
            return EventResult::Ignored;
        }
        self.blink.reset_manual();
        self.insert(&printable);
        EventResult::Handled
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    /// Losing focus ends any drag in progress and forgets held keys.
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.dragging = false;
            self.key_repeat.clear();
        }
    }

    fn contains_point(&self, x: f32, y: f32) -> bool {
        self.rect.contains(rune_text::Point::new(x, y))
    }
}
