//! Minimal static-file server with SPA fallback.
//!
//! Serves a built front-end bundle: any path that resolves to a file under
//! the site root is served as-is; extensionless paths fall back to the
//! entry document so client-side routes survive a hard reload. Explicitly
//! not part of the application core.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tracing::info;

const ENTRY_DOCUMENT: &str = "index.html";

#[derive(Debug, Clone)]
struct SiteRoot {
    root: PathBuf,
}

pub async fn serve(root: PathBuf, port: u16, mode: &str) -> std::io::Result<()> {
    let state = Arc::new(SiteRoot { root });
    let app = Router::new()
        .fallback(get(serve_path))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, mode, "static server listening");
    axum::serve(listener, app).await
}

async fn serve_path(State(site): State<Arc<SiteRoot>>, uri: Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');

    let Some(relative) = sanitize(requested) else {
        return plain(StatusCode::BAD_REQUEST, "invalid path");
    };

    let mut target = site.root.join(&relative);
    if relative.as_os_str().is_empty() || target.is_dir() {
        target = site.root.join(ENTRY_DOCUMENT);
    }

    match tokio::fs::read(&target).await {
        Ok(bytes) => file_response(&target, bytes),
        Err(_) if target.extension().is_none() => {
            // Unmatched extensionless route: hand the SPA its entry document
            // and let client-side routing take over.
            let entry = site.root.join(ENTRY_DOCUMENT);
            match tokio::fs::read(&entry).await {
                Ok(bytes) => file_response(&entry, bytes),
                Err(_) => plain(StatusCode::NOT_FOUND, "entry document missing"),
            }
        }
        Err(_) => plain(StatusCode::NOT_FOUND, "not found"),
    }
}

/// Rejects anything that could escape the site root.
fn sanitize(requested: &str) -> Option<PathBuf> {
    let path = Path::new(requested);
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(clean)
}

fn file_response(path: &Path, bytes: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type(path))
        .body(Body::from(bytes))
        .unwrap_or_else(|_| plain(StatusCode::INTERNAL_SERVER_ERROR, "response build failed"))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

fn plain(status: StatusCode, message: &'static str) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(message))
        .expect("static response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_traversal() {
        assert!(sanitize("../etc/passwd").is_none());
        assert!(sanitize("a/../../b").is_none());
        assert_eq!(sanitize("assets/app.js"), Some(PathBuf::from("assets/app.js")));
        assert_eq!(sanitize("./assets/app.js"), Some(PathBuf::from("assets/app.js")));
        assert_eq!(sanitize(""), Some(PathBuf::new()));
    }

    #[test]
    fn content_types_cover_bundle_assets() {
        assert_eq!(
            content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("logo.bin")), "application/octet-stream");
    }
}
