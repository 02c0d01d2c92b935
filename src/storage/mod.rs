//! Upload Store
//!
//! Disk-backed storage for uploaded documents. Each stored file lives under
//! a server-generated UUID directory, `<root>/<id>/<filename>`, so two
//! clients uploading the same filename can never clobber each other. The
//! access URL mirrors the on-disk layout: `/uploads/<id>/<filename>`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Failed to create upload directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write file: {0}")]
    Write(std::io::Error),

    #[error("Failed to read file: {0}")]
    Read(std::io::Error),
}

/// Descriptor for a stored file, immutable once written.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: String,
    pub file_name: String,
    pub size: u64,
    pub path: PathBuf,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Disk-backed store for uploaded files.
#[derive(Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an uploaded file under a fresh UUID key.
    ///
    /// Creates the upload directory on first use. The client-supplied
    /// filename is kept for display and for the access URL, but never
    /// determines the storage key.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<StoredFile, StorageError> {
        let file_name = sanitize_name(file_name)?;

        let id = Uuid::new_v4().to_string();
        let dir = self.root.join(&id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(StorageError::CreateDir)?;

        let path = dir.join(&file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(StorageError::Write)?;

        tracing::info!(
            id = %id,
            file_name = %file_name,
            size = data.len(),
            "File stored"
        );

        Ok(StoredFile {
            url: format!("/uploads/{}/{}", id, file_name),
            id,
            file_name,
            size: data.len() as u64,
            path,
            uploaded_at: Utc::now(),
        })
    }

    /// Read a stored file back by its id and filename.
    pub async fn read(&self, id: &str, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let file_name = sanitize_name(file_name)?;
        sanitize_name(id)?;

        let path = self.root.join(id).join(&file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(format!("{}/{}", id, file_name)))
            }
            Err(e) => Err(StorageError::Read(e)),
        }
    }
}

/// Reject names that could escape the store root.
fn sanitize_name(name: &str) -> Result<String, StorageError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store.save("contract.pdf", b"%PDF-1.4 fake").await.unwrap();
        assert_eq!(stored.file_name, "contract.pdf");
        assert_eq!(stored.size, 13);
        assert_eq!(stored.url, format!("/uploads/{}/contract.pdf", stored.id));

        let bytes = store.read(&stored.id, "contract.pdf").await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn same_filename_gets_distinct_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let first = store.save("brief.pdf", b"first").await.unwrap();
        let second = store.save("brief.pdf", b"second").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.read(&first.id, "brief.pdf").await.unwrap(), b"first");
        assert_eq!(store.read(&second.id, "brief.pdf").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn read_of_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let err = store.read("no-such-id", "missing.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        for bad in ["../etc/passwd", "a/b.pdf", "..", ""] {
            let err = store.save(bad, b"x").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidName(_)), "{:?}", bad);
        }
    }
}
