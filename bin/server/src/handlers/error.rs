//! Converts handler failures into plain-text error responses

use clipboard_bridge::ClipboardError;
use storage::StoreError;
use tracing::error;

/// 400 for input the handler refuses to act on
pub fn handle_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorBadRequest(format!("{}: {}", msg, e))
}

/// 500 for failures on the host side
pub fn handle_server_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    actix_web::error::ErrorInternalServerError(format!("{}: {}", msg, e))
}

/// 404 when a file cannot be opened; the cause is logged, not sent
pub fn handle_not_found<E: std::fmt::Display>(filename: &str, e: E) -> actix_web::Error {
    error!("File {} not found: {}", filename, e);
    actix_web::error::ErrorNotFound(format!("File {} not found", filename))
}

/// Map a store failure to 404 (open failed) or 500 (anything else)
pub fn handle_store_error(msg: &str, filename: &str, e: StoreError) -> actix_web::Error {
    match e {
        StoreError::NotFound { .. } => handle_not_found(filename, e),
        StoreError::Io { .. } => handle_server_error(msg, e),
    }
}

/// Clipboard failures always surface as 500 so the client can tell them apart from success
pub fn handle_clipboard_error(msg: &str, e: ClipboardError) -> actix_web::Error {
    handle_server_error(msg, e)
}
