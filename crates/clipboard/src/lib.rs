//! Clipboard bridge: exposes the single OS clipboard value to HTTP handlers
//! and opens any web links pushed into it.

pub mod memory;
pub mod system;
mod urls;

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub use system::{SystemBrowser, SystemClipboard};
pub use urls::detect_urls;

/// Errors returned by clipboard backends
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard holds no text
    #[error("clipboard is empty")]
    Empty,

    /// The OS clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing failed
    #[error("clipboard access failed: {0}")]
    Access(String),
}

/// Read/write access to a single text clipboard value
pub trait ClipboardBackend: Send + Sync {
    fn read(&self) -> Result<String, ClipboardError>;
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Launches URLs in the user's browser
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Combines a clipboard backend with a URL opener.
///
/// Cloning is cheap; clones share the same backend and opener.
#[derive(Clone)]
pub struct ClipboardBridge {
    backend: Arc<dyn ClipboardBackend>,
    opener: Arc<dyn UrlOpener>,
}

impl ClipboardBridge {
    pub fn new(backend: Arc<dyn ClipboardBackend>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { backend, opener }
    }

    /// Overwrite the clipboard, then open every URL found in `text`.
    ///
    /// Returns the URLs handed to the opener. A URL that fails to open is
    /// logged and does not fail the call.
    pub fn set(&self, text: &str) -> Result<Vec<String>, ClipboardError> {
        self.backend.write(text)?;

        let urls = detect_urls(text);
        for url in &urls {
            info!("Opening link from clipboard: {}", url);
            if let Err(e) = self.opener.open(url) {
                warn!("Failed to open {}: {}", url, e);
            }
        }
        Ok(urls)
    }

    /// Current clipboard text; an empty clipboard reads as `""`
    pub fn get(&self) -> Result<String, ClipboardError> {
        match self.backend.read() {
            Err(ClipboardError::Empty) => Ok(String::new()),
            other => other,
        }
    }
}
