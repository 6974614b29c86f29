//! Server application state, built once at startup and shared by every worker

use crate::handlers::webui::StaticAssets;
use clipboard_bridge::ClipboardBridge;
use std::sync::Arc;
use storage::FileStore;

pub struct AppState {
    pub store: Arc<dyn FileStore>,
    pub clipboard: ClipboardBridge,
    pub webui: StaticAssets,
}

impl AppState {
    pub fn new(store: Arc<dyn FileStore>, clipboard: ClipboardBridge, webui: StaticAssets) -> Self {
        Self {
            store,
            clipboard,
            webui,
        }
    }
}
