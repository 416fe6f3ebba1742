//! File management module for Filedrop.
//!
//! This module provides:
//! - File metadata types and the `files` table repository
//! - The storage directory holding uploaded bytes
//! - Upload validation (extension allow-list, size limit)
//! - The service sequencing disk and database writes

mod metadata;
mod policy;
mod repository;
mod service;
mod storage;

pub use metadata::{FileId, FileRecord, NewFileRecord};
pub use policy::UploadPolicy;
pub use repository::{FileRepository, FileStore};
pub use service::FileService;
pub use storage::FileStorage;
