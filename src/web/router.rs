//! Router configuration for the web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{delete_file, get_file, list_files, upload_file, AppState};
use super::middleware::create_cors_layer;
use super::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::config::WebConfig;

/// Room left in the request body limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the file API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let max_file_size =
        usize::try_from(app_state.files.policy().max_file_size()).unwrap_or(usize::MAX);
    let body_limit = max_file_size.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/upload", post(upload_file))
        .route("/files", get(list_files))
        .route("/files/:id", get(get_file).delete(delete_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the router serving the OpenAPI document and Swagger UI.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Create the complete application: file API, health check and API docs.
pub fn create_app(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    create_router(app_state, &web_config.cors_origins)
        .merge(create_health_router())
        .merge(create_swagger_router())
        .layer(CompressionLayer::new())
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
