//! File handlers for the web API.

use axum::{
    extract::{multipart::MultipartError, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::file::{FileId, FileRecord, UploadPolicy};
use crate::web::dto::{ApiPath, MessageResponse, UploadForm, UploadMultipart};
use crate::web::error::{ApiError, ErrorBody};
use crate::web::handlers::AppState;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Map a multipart read failure to an API error.
///
/// Bodies over the request limit are reported like any other oversize file.
fn multipart_error(err: MultipartError, policy: &UploadPolicy) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return policy.too_large().into();
    }
    tracing::warn!("Failed to read multipart data: {}", err);
    ApiError::bad_request("Invalid multipart data")
}

/// POST /upload - Upload a file.
///
/// Request body: multipart/form-data with a "file" field.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "files",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded", body = MessageResponse),
        (status = 400, description = "Disallowed extension, invalid filename, file too large or malformed multipart body", body = ErrorBody),
        (status = 422, description = "No file field in the form, or it is not a file", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    UploadMultipart(mut multipart): UploadMultipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let policy = state.files.policy();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, policy))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            return Err(ApiError::unprocessable("Field 'file' must be a file upload"));
        };
        // Reject the name before reading a possibly oversized body
        policy.check_filename(&filename)?;

        let content = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, policy))?;
        upload = Some((filename, content));
        break;
    }

    let (filename, content) =
        upload.ok_or_else(|| ApiError::unprocessable("Field 'file' is required"))?;

    let record = state.files.upload(&filename, &content).await?;

    Ok(Json(MessageResponse::new(format!(
        "File '{}' uploaded successfully",
        record.filename
    ))))
}

/// GET /files - List all files, newest first.
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "All uploaded files", body = Vec<FileRecord>),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let files = state.files.list().await?;
    Ok(Json(files))
}

/// GET /files/:id - Get file metadata.
#[utoipa::path(
    get,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File metadata", body = FileRecord),
        (status = 404, description = "File not found", body = ErrorBody),
        (status = 422, description = "File ID is not a valid integer", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    )
)]
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    ApiPath(file_id): ApiPath<FileId>,
) -> Result<Json<FileRecord>, ApiError> {
    let file = state.files.get(file_id).await?;
    Ok(Json(file))
}

/// DELETE /files/:id - Delete a file and its metadata.
#[utoipa::path(
    delete,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File deleted", body = MessageResponse),
        (status = 404, description = "File not found", body = ErrorBody),
        (status = 422, description = "File ID is not a valid integer", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    )
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    ApiPath(file_id): ApiPath<FileId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.files.delete(file_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "File ID {file_id} deleted successfully"
    ))))
}
