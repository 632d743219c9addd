//! Clipboard access for text widgets.
//!
//! The widget never talks to the OS clipboard directly. It goes through a
//! [`ClipboardService`] wrapped in a [`ClipboardBridge`], which runs every
//! access on a worker thread: copies are fire-and-forget, pastes block the
//! caller until the worker hands back a plain string.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use thiserror::Error;

/// Errors raised by clipboard backends and the worker threads around them.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing text failed.
    #[error("clipboard access failed: {0}")]
    Access(String),

    /// The worker thread could not be spawned.
    #[error("failed to spawn clipboard worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// The worker thread panicked before returning.
    #[error("clipboard worker panicked")]
    WorkerPanicked,
}

/// Result type for clipboard operations.
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A text clipboard. Implementations may be slow or OS-bound.
pub trait ClipboardService: Send + Sync {
    fn write(&self, text: &str) -> Result<()>;
    fn read(&self) -> Result<String>;
}

/// The system clipboard through `arboard`.
///
/// `arboard::Clipboard` is not `Send` on every platform, so a handle is opened
/// per call on whichever thread performs the access.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut clip =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clip.set_text(text.to_owned())
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }

    fn read(&self) -> Result<String> {
        let mut clip =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clip.get_text()
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// Process-local clipboard, used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(text.into()),
        }
    }

    /// Current contents, for inspection.
    pub fn contents(&self) -> String {
        self.read().unwrap_or_default()
    }
}

impl ClipboardService for MemoryClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Access(e.to_string()))?;
        contents.clear();
        contents.push_str(text);
        Ok(())
    }

    fn read(&self) -> Result<String> {
        self.contents
            .lock()
            .map(|contents| contents.clone())
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// Line breaks in the buffer become CR+LF on the clipboard.
pub fn to_clipboard_text(text: &str) -> String {
    text.replace('\n', "\r\n")
}

/// Each CR+LF pair on the clipboard becomes a space followed by a line break,
/// keeping the pasted length equal to the clipboard length.
pub fn normalize_pasted_text(text: &str) -> String {
    text.replace("\r\n", " \n")
}

/// Runs clipboard accesses off the caller's thread.
#[derive(Clone)]
pub struct ClipboardBridge {
    service: Arc<dyn ClipboardService>,
}

impl ClipboardBridge {
    pub fn new(service: Arc<dyn ClipboardService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &Arc<dyn ClipboardService> {
        &self.service
    }

    /// Write `text` on a detached worker and return immediately.
    ///
    /// Empty text is never written. Failures are logged and dropped. The
    /// returned handle is only useful to callers that want to wait in tests.
    pub fn copy_detached(&self, text: &str) -> Option<JoinHandle<()>> {
        if text.is_empty() {
            return None;
        }
        let service = Arc::clone(&self.service);
        let payload = to_clipboard_text(text);
        let spawned = thread::Builder::new()
            .name("rune-clipboard-copy".into())
            .spawn(move || {
                if let Err(error) = service.write(&payload) {
                    tracing::warn!(?error, "clipboard copy failed");
                } else {
                    tracing::debug!(len = payload.len(), "clipboard copy done");
                }
            });
        match spawned {
            Ok(handle) => Some(handle),
            Err(error) => {
                tracing::warn!(?error, "clipboard copy worker not started");
                None
            }
        }
    }

    /// Read the clipboard on a worker thread and wait for it.
    ///
    /// Returns normalized text ready for insertion, or an empty string when
    /// the clipboard is unavailable.
    pub fn paste_blocking(&self) -> String {
        match self.read_on_worker() {
            Ok(text) => normalize_pasted_text(&text),
            Err(error) => {
                tracing::warn!(?error, "clipboard paste failed");
                String::new()
            }
        }
    }

    fn read_on_worker(&self) -> Result<String> {
        let service = Arc::clone(&self.service);
        let handle = thread::Builder::new()
            .name("rune-clipboard-paste".into())
            .spawn(move || service.read())?;
        handle.join().map_err(|_| ClipboardError::WorkerPanicked)?
    }
}

impl std::fmt::Debug for ClipboardBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardBridge").finish_non_exhaustive()
    }
}
