//! Web API module for Filedrop.
//!
//! This module provides the REST API: upload, list, get-by-id and
//! delete-by-id, plus a health check and generated API documentation.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_app, create_router};
pub use server::WebServer;
