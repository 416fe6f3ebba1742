//! OpenAPI document for the web API.

use utoipa::OpenApi;

use super::dto::{MessageResponse, UploadForm};
use super::error::{ErrorBody, ErrorCode};
use super::handlers::files;
use crate::file::FileRecord;

/// Path the OpenAPI JSON is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the interactive Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filedrop API",
        description = "Upload files, list them, fetch their metadata and delete them."
    ),
    paths(
        files::upload_file,
        files::list_files,
        files::get_file,
        files::delete_file,
    ),
    components(schemas(FileRecord, MessageResponse, UploadForm, ErrorBody, ErrorCode)),
    tags((name = "files", description = "File upload and metadata"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();

        assert!(paths["/upload"]["post"].is_object());
        assert!(paths["/files"]["get"].is_object());
        assert!(paths["/files/{id}"]["get"].is_object());
        assert!(paths["/files/{id}"]["delete"].is_object());
    }

    #[test]
    fn test_openapi_has_file_record_schema() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let record = &json["components"]["schemas"]["FileRecord"];
        for field in ["id", "filename", "filepath", "uploaded_at"] {
            assert!(record["properties"][field].is_object(), "missing {field}");
        }
    }
}
