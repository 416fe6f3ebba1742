//! Request DTOs for the web API.

use utoipa::ToSchema;

/// Multipart form accepted by `POST /upload`.
///
/// Only used to describe the request in the OpenAPI document; the handler
/// reads the multipart stream directly.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// File content. The part's filename is stored as-is.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
