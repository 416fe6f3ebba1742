//! Request extractors that report rejections as API errors.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// A path extractor whose rejection is an [`ApiError`] JSON body.
///
/// ```ignore
/// async fn get_file(ApiPath(id): ApiPath<FileId>) -> Result<Json<FileRecord>, ApiError> {
///     // ...
/// }
/// ```
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// A multipart extractor whose rejection is an [`ApiError`] JSON body.
///
/// Bodies that are not `multipart/form-data`, or that lack a boundary, are
/// rejected before the handler runs.
pub struct UploadMultipart(pub Multipart);

#[async_trait]
impl<S> FromRequest<S> for UploadMultipart
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(UploadMultipart(multipart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/files/:id",
                get(|ApiPath(id): ApiPath<i32>| async move { id.to_string() }),
            )
            .route(
                "/upload",
                post(|UploadMultipart(_multipart): UploadMultipart| async { "ok" }),
            )
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_path_valid() {
        let response = app()
            .oneshot(Request::builder().uri("/files/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn test_api_path_rejection_is_json() {
        for uri in ["/files/abc", "/files/99999999999"] {
            let response = app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let body = json_body(response).await;
            assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
            assert!(body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Invalid path parameter"));
        }
    }

    #[tokio::test]
    async fn test_upload_multipart_rejection_is_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"file":"a.pdf"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Invalid multipart data");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}
