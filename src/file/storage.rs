//! File storage for Filedrop.
//!
//! Uploaded bytes are written flat into the storage directory under the
//! client's original filename:
//! ```text
//! {base_path}/
//! ├── report.pdf
//! └── notes.txt
//! ```
//! A later upload with the same name replaces the earlier file.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::Result;

/// File storage service for managing physical files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base directory for file storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage with the given base path.
    ///
    /// The base directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the path a file with the given name is stored at.
    ///
    /// The name must already have been checked to be a single path component.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }

    /// Write content under the given filename, replacing any existing file.
    ///
    /// Returns the path the content was written to.
    pub async fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(filename);
        fs::write(&path, content).await?;
        Ok(path)
    }

    /// Remove a stored file.
    ///
    /// Returns `true` if the file was removed, `false` if it didn't exist.
    pub async fn remove(&self, path: impl AsRef<Path>) -> Result<bool> {
        match fs::remove_file(path.as_ref()).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("uploads")).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_creates_directory() {
        let (temp_dir, storage) = setup();
        assert!(temp_dir.path().join("uploads").is_dir());
        assert_eq!(storage.base_path(), temp_dir.path().join("uploads"));
    }

    #[tokio::test]
    async fn test_save_uses_original_name() {
        let (_temp_dir, storage) = setup();

        let path = storage.save("report.pdf", b"%PDF-1.4").await.unwrap();

        assert_eq!(path, storage.base_path().join("report.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_save_overwrites_same_name() {
        let (_temp_dir, storage) = setup();

        storage.save("notes.txt", b"first").await.unwrap();
        let path = storage.save("notes.txt", b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_remove() {
        let (_temp_dir, storage) = setup();

        let path = storage.save("a.png", b"png").await.unwrap();
        assert!(path.exists());

        assert!(storage.remove(&path).await.unwrap());
        assert!(!path.exists());

        // Already gone
        assert!(!storage.remove(&path).await.unwrap());
    }
}
