//! Data Transfer Objects for the web API.

pub mod extract;
pub mod request;
pub mod response;

pub use extract::{ApiPath, UploadMultipart};
pub use request::UploadForm;
pub use response::MessageResponse;
