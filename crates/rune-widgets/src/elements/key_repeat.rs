use std::time::{Duration, Instant};

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

/// Per-widget key-repeat throttle.
///
/// Tracked keys are accepted only when at least `delay` has passed since the
/// same key was last accepted. Untracked keys always pass. State lives in the
/// widget instance, so two widgets never throttle each other.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    delay: Duration,
    last_accepted: HashMap<KeyCode, Instant>,
}

impl KeyRepeat {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_accepted: HashMap::new(),
        }
    }

    /// Navigation, deletion and clipboard keys.
    pub fn is_tracked(key: KeyCode) -> bool {
        matches!(
            key,
            KeyCode::ArrowLeft
                | KeyCode::ArrowRight
                | KeyCode::ArrowUp
                | KeyCode::ArrowDown
                | KeyCode::Home
                | KeyCode::End
                | KeyCode::Delete
                | KeyCode::Backspace
                | KeyCode::KeyA
                | KeyCode::KeyC
                | KeyCode::KeyV
                | KeyCode::KeyX
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Decide whether a trigger of `key` at `now` is honored, recording it if so.
    pub fn accept(&mut self, key: KeyCode, now: Instant) -> bool {
        if !Self::is_tracked(key) {
            return true;
        }
        if let Some(&last) = self.last_accepted.get(&key) {
            if now.saturating_duration_since(last) < self.delay {
                return false;
            }
        }
        self.last_accepted.insert(key, now);
        true
    }

    /// Forget all trigger times.
    pub fn clear(&mut self) {
        self.last_accepted.clear();
    }
}
