//! In-memory stand-ins for the OS clipboard and browser.
//!
//! `MemoryClipboard` backs `--headless` runs on hosts without a display
//! server; all three types double as test fakes.

use crate::{ClipboardBackend, ClipboardError, UrlOpener};
use std::sync::Mutex;

/// Clipboard held in process memory; starts empty
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    value: Mutex<Option<String>>,
}

impl ClipboardBackend for MemoryClipboard {
    fn read(&self) -> Result<String, ClipboardError> {
        self.value
            .lock()
            .map_err(|e| ClipboardError::Access(e.to_string()))?
            .clone()
            .ok_or(ClipboardError::Empty)
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        *self
            .value
            .lock()
            .map_err(|e| ClipboardError::Access(e.to_string()))? = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails, as on a host without a display server
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl ClipboardBackend for UnavailableClipboard {
    fn read(&self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard".to_string()))
    }

    fn write(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard".to_string()))
    }
}

/// Records every URL it is asked to open instead of launching anything
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    /// Records calls but reports each one as failed
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_string());
        }
        if self.fail {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no browser",
            ));
        }
        Ok(())
    }
}
