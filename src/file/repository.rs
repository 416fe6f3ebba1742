//! File metadata repository for Filedrop.
//!
//! [`FileStore`] is the data-access seam used by the web layer. The
//! production implementation, [`FileRepository`], runs plain SQL against the
//! shared sqlx pool; tests can swap in their own store.

use async_trait::async_trait;

use super::metadata::{FileId, FileRecord, NewFileRecord};
use crate::db::DbPool;
use crate::Result;

/// Data-access operations on the `files` table.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Insert a new row and return it with its assigned ID and timestamp.
    async fn insert(&self, new_file: &NewFileRecord) -> Result<FileRecord>;

    /// List every row, newest upload first.
    async fn list_all(&self) -> Result<Vec<FileRecord>>;

    /// Get a row by ID.
    async fn get_by_id(&self, id: FileId) -> Result<Option<FileRecord>>;

    /// Delete a row by ID.
    ///
    /// Returns true if a row was deleted, false if not found.
    async fn delete(&self, id: FileId) -> Result<bool>;
}

/// Repository for file metadata backed by the database pool.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: DbPool,
}

impl FileRepository {
    /// Create a new FileRepository sharing the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn insert(&self, new_file: &NewFileRecord) -> Result<FileRecord> {
        let record = sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (filename, filepath) VALUES ($1, $2)
             RETURNING id, filename, filepath, uploaded_at",
        )
        .bind(&new_file.filename)
        .bind(&new_file.filepath)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FileRecord>> {
        let records = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, filepath, uploaded_at
             FROM files ORDER BY uploaded_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_by_id(&self, id: FileId) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(
            "SELECT id, filename, filepath, uploaded_at FROM files WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: FileId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
