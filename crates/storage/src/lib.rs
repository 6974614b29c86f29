//! Flat file store backing the `/list`, `/download` and `/upload` endpoints

pub mod filesystem;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tokio::io::AsyncRead;

pub use filesystem::FilesystemStore;

/// Errors reported by a [`FileStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named file could not be opened
    #[error("file {filename} not found: {source}")]
    NotFound {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure
    #[error("failed to {action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An opened file ready to be streamed to a client
#[derive(Debug)]
pub struct StoredFile {
    pub file: tokio::fs::File,
    pub size: u64,
}

/// Storage trait for the shared transfer folder.
///
/// Names are relative to the store root. The filesystem is the only source of
/// truth: nothing is cached or indexed between calls.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Names of all files below the root, directories excluded.
    /// Order follows directory traversal and is not sorted.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Open a file for download
    async fn open(&self, filename: &str) -> Result<StoredFile, StoreError>;

    /// Replace `filename` with everything read from `source`, returning the byte count
    async fn store(
        &self,
        filename: &str,
        source: &mut (dyn AsyncRead + Unpin + Send),
    ) -> Result<u64, StoreError>;
}
