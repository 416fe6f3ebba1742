//! Response DTOs for the web API.

use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement returned by upload and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    #[schema(example = "File 'report.pdf' uploaded successfully")]
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
