//! Filesystem-based storage implementation

use crate::{FileStore, StoreError, StoredFile};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncRead;
use tracing::{debug, warn};
use uuid::Uuid;

/// Prefix of in-flight upload files; these never show up in listings
pub const UPLOAD_TEMP_PREFIX: &str = ".lemon_push_upload_";

const UPLOAD_TEMP_SUFFIX: &str = ".part";

/// Filesystem-based storage rooted at the configured folder
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root folder if it is missing. Returns true if it was created.
    pub async fn ensure_root(&self) -> Result<bool, StoreError> {
        if tokio::fs::try_exists(&self.root).await.unwrap_or(false) {
            return Ok(false);
        }
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Io {
                action: "create storage folder",
                path: self.root.clone(),
                source,
            })?;
        Ok(true)
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(
            "{}{}{}",
            UPLOAD_TEMP_PREFIX,
            Uuid::new_v4(),
            UPLOAD_TEMP_SUFFIX
        ))
    }
}

fn is_upload_temp(name: &str) -> bool {
    name.starts_with(UPLOAD_TEMP_PREFIX) && name.ends_with(UPLOAD_TEMP_SUFFIX)
}

#[async_trait]
impl FileStore for FilesystemStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let walk_err = |source| StoreError::Io {
                action: "walk",
                path: dir.clone(),
                source,
            };
            let mut entries = tokio::fs::read_dir(&dir).await.map_err(walk_err)?;

            while let Some(entry) = entries.next_entry().await.map_err(walk_err)? {
                // file_type() does not follow symlinks, so linked directories are listed as entries
                let file_type = entry.file_type().await.map_err(walk_err)?;
                if file_type.is_dir() {
                    pending.push(entry.path());
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                if !is_upload_temp(&name) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }

    async fn open(&self, filename: &str) -> Result<StoredFile, StoreError> {
        let path = self.file_path(filename);
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|source| StoreError::NotFound {
                filename: filename.to_string(),
                source,
            })?;

        let metadata = file.metadata().await.map_err(|source| StoreError::Io {
            action: "stat",
            path: path.clone(),
            source,
        })?;

        if metadata.is_dir() {
            return Err(StoreError::NotFound {
                filename: filename.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
            });
        }

        Ok(StoredFile {
            file,
            size: metadata.len(),
        })
    }

    async fn store(
        &self,
        filename: &str,
        source: &mut (dyn AsyncRead + Unpin + Send),
    ) -> Result<u64, StoreError> {
        let destination = self.file_path(filename);
        let temp = self.temp_path();
        debug!("Writing upload {:?} via {:?}", destination, temp);

        let written = async {
            let mut file = tokio::fs::File::create(&temp).await?;
            let written = tokio::io::copy(&mut *source, &mut file).await?;
            file.sync_all().await?;
            Ok::<_, std::io::Error>(written)
        }
        .await;

        let written = match written {
            Ok(written) => written,
            Err(source) => {
                discard_temp(&temp).await;
                return Err(StoreError::Io {
                    action: "write",
                    path: temp,
                    source,
                });
            }
        };

        if let Err(source) = tokio::fs::rename(&temp, &destination).await {
            discard_temp(&temp).await;
            return Err(StoreError::Io {
                action: "replace",
                path: destination,
                source,
            });
        }

        Ok(written)
    }
}

async fn discard_temp(temp: &Path) {
    if let Err(e) = tokio::fs::remove_file(temp).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove temporary upload {:?}: {}", temp, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn store_bytes(store: &FilesystemStore, name: &str, content: &[u8]) -> u64 {
        let mut reader = content;
        store.store(name, &mut reader).await.unwrap()
    }

    async fn read_back(store: &FilesystemStore, name: &str) -> Vec<u8> {
        let mut stored = store.open(name).await.unwrap();
        let mut buf = Vec::new();
        stored.file.read_to_end(&mut buf).await.unwrap();
        assert_eq!(stored.size, buf.len() as u64);
        buf
    }

    #[tokio::test]
    async fn test_upload_then_download_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path());
        let content: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();

        assert_eq!(store_bytes(&store, "blob.bin", &content).await, 70_000);
        assert_eq!(read_back(&store, "blob.bin").await, content);
    }

    #[tokio::test]
    async fn test_store_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path());

        store_bytes(&store, "a.txt", b"a much longer first version").await;
        store_bytes(&store, "a.txt", b"short").await;

        assert_eq!(read_back(&store, "a.txt").await, b"short");
    }

    #[tokio::test]
    async fn test_list_reflects_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path());
        assert!(store.list().await.unwrap().is_empty());

        store_bytes(&store, "a.txt", b"a").await;
        store_bytes(&store, "b.txt", b"b").await;

        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_list_walks_subdirectories_and_skips_them() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        std::fs::write(dir.path().join("top.txt"), "t").unwrap();
        std::fs::write(dir.path().join("nested/deeper/inner.txt"), "i").unwrap();

        let store = FilesystemStore::new(dir.path());
        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["inner.txt", "top.txt"]);
    }

    #[tokio::test]
    async fn test_list_hides_in_flight_uploads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("real.txt"), "r").unwrap();
        std::fs::write(
            dir.path()
                .join(format!("{}abc{}", UPLOAD_TEMP_PREFIX, UPLOAD_TEMP_SUFFIX)),
            "partial",
        )
        .unwrap();

        let store = FilesystemStore::new(dir.path());
        assert_eq!(store.list().await.unwrap(), vec!["real.txt"]);
    }

    #[tokio::test]
    async fn test_list_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path().join("gone"));
        assert!(matches!(store.list().await, Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn test_open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path());
        assert!(matches!(
            store.open("nope.txt").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_open_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let store = FilesystemStore::new(dir.path());
        assert!(matches!(
            store.open("sub").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path());
        std::fs::create_dir(dir.path().join("taken")).unwrap();

        // renaming a file over a directory fails
        let mut reader: &[u8] = b"data";
        assert!(store.store("taken", &mut reader).await.is_err());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| is_upload_temp(n))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_ensure_root_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemStore::new(dir.path().join("_lemon_"));
        assert!(store.ensure_root().await.unwrap());
        assert!(!store.ensure_root().await.unwrap());
        assert!(store.root().is_dir());
    }
}
