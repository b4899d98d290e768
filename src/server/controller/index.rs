use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::server::router::ApiDoc;

/// GET / - Plain-text greeting, handy as a liveness probe
pub async fn index() -> &'static str {
    "hello world"
}

/// GET /api-docs/openapi.json - OpenAPI document describing every collection endpoint
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
