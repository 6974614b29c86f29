//! OS-backed clipboard and browser launcher

use crate::{ClipboardBackend, ClipboardError, UrlOpener};
use std::sync::mpsc;
use tracing::{debug, error};

enum Request {
    Read(mpsc::Sender<Result<String, ClipboardError>>),
    Write(String, mpsc::Sender<Result<(), ClipboardError>>),
}

/// The desktop clipboard.
///
/// `arboard::Clipboard` is not `Send` on every platform, and on X11 the
/// written value only stays available while the handle is alive. The handle
/// therefore lives on a dedicated thread for the life of the process; requests
/// reach it over a channel, which also serializes concurrent callers.
pub struct SystemClipboard {
    requests: mpsc::Sender<Request>,
}

impl SystemClipboard {
    pub fn spawn() -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Request>();
        std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || serve(rx))?;
        Ok(Self { requests: tx })
    }

    fn closed() -> ClipboardError {
        ClipboardError::Unavailable("clipboard thread stopped".to_string())
    }
}

fn serve(rx: mpsc::Receiver<Request>) {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => Ok(clipboard),
        Err(e) => {
            error!("Failed to open system clipboard: {}", e);
            Err(e.to_string())
        }
    };

    for request in rx {
        match request {
            Request::Read(reply) => {
                let result = match clipboard.as_mut() {
                    Ok(cb) => cb.get_text().map_err(map_error),
                    Err(e) => Err(ClipboardError::Unavailable(e.clone())),
                };
                let _ = reply.send(result);
            }
            Request::Write(text, reply) => {
                let result = match clipboard.as_mut() {
                    Ok(cb) => cb.set_text(text).map_err(map_error),
                    Err(e) => Err(ClipboardError::Unavailable(e.clone())),
                };
                let _ = reply.send(result);
            }
        }
    }
    debug!("Clipboard thread exiting");
}

fn map_error(e: arboard::Error) -> ClipboardError {
    match e {
        arboard::Error::ContentNotAvailable => ClipboardError::Empty,
        arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
        other => ClipboardError::Access(other.to_string()),
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read(&self) -> Result<String, ClipboardError> {
        let (reply, response) = mpsc::channel();
        self.requests
            .send(Request::Read(reply))
            .map_err(|_| Self::closed())?;
        response.recv().map_err(|_| Self::closed())?
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let (reply, response) = mpsc::channel();
        self.requests
            .send(Request::Write(text.to_string(), reply))
            .map_err(|_| Self::closed())?;
        response.recv().map_err(|_| Self::closed())?
    }
}

/// Opens URLs with the platform handler (`open`, `xdg-open`, `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        // does not wait for the browser to exit
        open::that_detached(url)
    }
}
