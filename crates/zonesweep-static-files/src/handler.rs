//! File Handler
//!
//! HTTP handlers for serving the bundled frontend: `/app/{*path}` for asset
//! files, plus a fallback that answers every unmatched route with the SPA
//! entry point.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::OpenApi;

use crate::service::FileService;

/// State for file routes
#[derive(Clone)]
pub struct FileState {
    pub file_service: Arc<FileService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_file),
    tags(
        (name = "Files", description = "Bundled frontend asset serving")
    )
)]
pub struct FileApiDoc;

#[utoipa::path(
    get,
    path = "/app/{file_path}",
    tag = "Files",
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 403, description = "Access denied - path outside static directory"),
        (status = 404, description = "File not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("file_path" = String, Path, description = "Relative path to the file from the static directory")
    )
)]
async fn get_file(
    Path(file_path): Path<String>,
    State(state): State<Arc<FileState>>,
) -> impl IntoResponse {
    debug!("GET /app/{}", file_path);

    match state.file_service.get_file(&file_path).await {
        Ok(content) => {
            let content_type = infer_content_type(&file_path);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            format!("File not found: {}", file_path).into_bytes(),
        ),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            error!("Access denied: {}", file_path);
            (
                StatusCode::FORBIDDEN,
                [(header::CONTENT_TYPE, "text/plain")],
                b"Access denied".to_vec(),
            )
        }
        Err(e) => {
            error!("Error reading file {}: {}", file_path, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                format!("Error reading file: {}", e).into_bytes(),
            )
        }
    }
}

/// Serve the SPA entry point for any route no other handler matched
async fn spa_fallback(State(state): State<Arc<FileState>>) -> Response {
    match state.file_service.index_html().await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            content,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read index.html: {}", e);
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain")],
                b"index.html not found".to_vec(),
            )
                .into_response()
        }
    }
}

fn infer_content_type(file_path: &str) -> &'static str {
    let extension = std::path::Path::new(file_path)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");

    match extension.to_lowercase().as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" | "map" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

pub fn configure_routes(file_service: Arc<FileService>) -> Router {
    let state = Arc::new(FileState { file_service });
    Router::new()
        .route("/app/{*file_path}", get(get_file))
        .fallback(spa_fallback)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn app_with_files() -> (tempfile::TempDir, Router) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>entry</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

        let service = Arc::new(FileService::new(dir.path().to_path_buf()));
        let app = configure_routes(service);
        (dir, app)
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_serves_asset_with_content_type() {
        let (_dir, app) = app_with_files();

        let response = app
            .oneshot(Request::builder().uri("/app/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
        assert_eq!(body_bytes(response).await, b"console.log('hi');");
    }

    #[tokio::test]
    async fn test_missing_asset_returns_404() {
        let (_dir, app) = app_with_files();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/app/missing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unmatched_route_serves_index_html_unchanged() {
        let (_dir, app) = app_with_files();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/some/client/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(body_bytes(response).await, b"<html>entry</html>");
    }

    #[test]
    fn test_infer_content_type() {
        assert_eq!(infer_content_type("index.html"), "text/html");
        assert_eq!(infer_content_type("assets/style.css"), "text/css");
        assert_eq!(infer_content_type("app.JS"), "application/javascript");
        assert_eq!(infer_content_type("favicon.ico"), "image/x-icon");
        assert_eq!(infer_content_type("unknown.bin"), "application/octet-stream");
        assert_eq!(infer_content_type("no_extension"), "application/octet-stream");
    }
}
