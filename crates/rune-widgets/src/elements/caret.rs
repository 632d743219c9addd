use std::time::Duration;

/// Caret blink state for editable controls.
///
/// Controls should:
/// - call `update` each frame with the elapsed time and current focus state
/// - call `reset_manual` after accepted keys, edits and caret moves
#[derive(Clone, Copy, Debug)]
pub struct CaretBlink {
    visible: bool,
    elapsed: Duration,
    interval: Duration,
    was_focused: bool,
}

impl CaretBlink {
    pub fn new(interval: Duration, initial_focused: bool) -> Self {
        Self {
            visible: initial_focused,
            elapsed: Duration::ZERO,
            interval,
            was_focused: initial_focused,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance the blink timer and handle focus transitions.
    pub fn update(&mut self, delta: Duration, focused: bool) {
        if focused != self.was_focused {
            // Gaining focus shows the caret at once, losing it hides it.
            self.visible = focused;
            self.elapsed = Duration::ZERO;
            self.was_focused = focused;
        }

        if focused && !self.interval.is_zero() {
            self.elapsed += delta;
            while self.elapsed >= self.interval {
                self.elapsed -= self.interval;
                self.visible = !self.visible;
            }
        }
    }

    /// Show the caret and restart the blink phase.
    pub fn reset_manual(&mut self) {
        self.visible = true;
        self.elapsed = Duration::ZERO;
    }
}
