//! File service for Filedrop.
//!
//! This module sequences the storage directory and the metadata table:
//! - Upload: validate, write bytes, insert row
//! - Delete: look up row, remove bytes, delete row
//!
//! Neither sequence is transactional. A failed insert leaves the written file
//! in place, and a failed row delete leaves a row whose file is gone.

use std::sync::Arc;

use tracing::{info, warn};

use super::metadata::{FileId, FileRecord, NewFileRecord};
use super::policy::UploadPolicy;
use super::repository::FileStore;
use super::storage::FileStorage;
use crate::{FiledropError, Result};

/// File service combining metadata store, storage directory and upload rules.
#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn FileStore>,
    storage: FileStorage,
    policy: UploadPolicy,
}

impl FileService {
    /// Create a new FileService.
    pub fn new(store: Arc<dyn FileStore>, storage: FileStorage, policy: UploadPolicy) -> Self {
        Self {
            store,
            storage,
            policy,
        }
    }

    /// Get the storage directory.
    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }

    /// Get the upload rules.
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Upload a file.
    ///
    /// The extension is checked before the size. Bytes are written before the
    /// metadata row is inserted.
    pub async fn upload(&self, filename: &str, content: &[u8]) -> Result<FileRecord> {
        self.policy.check_filename(filename)?;
        self.policy.check_size(content.len() as u64)?;

        let path = self.storage.save(filename, content).await?;
        let new_file = NewFileRecord::new(filename, path.to_string_lossy());

        let record = self.store.insert(&new_file).await.map_err(|e| {
            warn!(
                filename,
                path = %path.display(),
                "Metadata insert failed; stored file left without a record"
            );
            e
        })?;

        info!(
            file_id = record.id,
            filename,
            size = content.len(),
            "File uploaded"
        );
        Ok(record)
    }

    /// List all files, newest first.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        self.store.list_all().await
    }

    /// Get a file by ID.
    pub async fn get(&self, id: FileId) -> Result<FileRecord> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| FiledropError::NotFound("File".to_string()))
    }

    /// Delete a file by ID.
    ///
    /// A file already missing from disk is not an error. Returns the deleted
    /// record.
    pub async fn delete(&self, id: FileId) -> Result<FileRecord> {
        let record = self.get(id).await?;

        if !self.storage.remove(&record.filepath).await? {
            warn!(
                file_id = id,
                path = %record.filepath,
                "Stored file was already missing"
            );
        }

        if !self.store.delete(id).await? {
            return Err(FiledropError::NotFound("File".to_string()));
        }

        info!(file_id = id, filename = %record.filename, "File deleted");
        Ok(record)
    }
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService")
            .field("storage", &self.storage)
            .field("policy", &self.policy)
            .finish()
    }
}
