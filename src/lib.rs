//! Filedrop - a small file upload service.
//!
//! Clients upload files over HTTP; the service validates them, writes them to
//! a storage directory and records their metadata in a relational table.

pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{FiledropError, Result};
pub use file::{
    FileId, FileRecord, FileRepository, FileService, FileStorage, FileStore, NewFileRecord,
    UploadPolicy,
};
pub use web::WebServer;
