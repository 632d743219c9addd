//! Event handling traits and utilities for interactive widgets.
//!
//! The host owns the event loop and translates platform events into the
//! small value types below, then dispatches them to widgets through
//! [`EventHandler`]. Widgets report back whether they consumed the event.

use std::time::Instant;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, ModifiersState};

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Mouse button press/release at viewport coordinates
#[derive(Debug, Clone, Copy)]
pub struct MouseClickEvent {
    pub button: MouseButton,
    pub state: ElementState,
    pub x: f32,
    pub y: f32,
    /// Modifiers held at the time of the click (shift extends the selection)
    pub modifiers: ModifiersState,
}

/// Keyboard input event data
#[derive(Debug, Clone, Copy)]
pub struct KeyboardEvent {
    pub key: KeyCode,
    pub state: ElementState,
    pub modifiers: ModifiersState,
    /// Set for OS auto-repeat events of a held key
    pub repeat: bool,
    /// When the host observed the event; drives key-repeat throttling
    pub timestamp: Instant,
}

impl KeyboardEvent {
    /// A fresh key press stamped with the current time.
    pub fn pressed(key: KeyCode, modifiers: ModifiersState) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            modifiers,
            repeat: false,
            timestamp: Instant::now(),
        }
    }

    pub fn at(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Pointer movement in viewport coordinates
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Mouse wheel movement over a point, in wheel steps (positive scrolls up)
#[derive(Debug, Clone, Copy)]
pub struct ScrollEvent {
    pub x: f32,
    pub y: f32,
    pub delta: f32,
}

/// Unified event handler trait for interactive widgets
///
/// Every method has an "ignore" default so widgets only implement what they
/// react to.
pub trait EventHandler {
    fn handle_mouse_click(&mut self, event: MouseClickEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_keyboard(&mut self, event: KeyboardEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// Pointer movement (hover states, drag operations)
    fn handle_mouse_move(&mut self, event: MouseMoveEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_scroll(&mut self, event: ScrollEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// Committed text from the platform (typed characters, IME commits)
    fn handle_text_input(&mut self, text: &str) -> EventResult {
        let _ = text;
        EventResult::Ignored
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn set_focused(&mut self, focused: bool) {
        let _ = focused;
    }

    /// Check if the point (x, y) in viewport coordinates is inside this widget
    fn contains_point(&self, x: f32, y: f32) -> bool {
        let _ = (x, y);
        false
    }
}
