//! API handlers for the web API.

pub mod files;

pub use files::*;

use crate::file::FileService;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File service (metadata store, storage directory, upload rules).
    pub files: FileService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(files: FileService) -> Self {
        Self { files }
    }
}
