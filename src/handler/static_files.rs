//! Index file serving module
//!
//! Reads the configured index file and turns the result into one of the two
//! root-path response shapes.

use crate::config::Config;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// Serve the index page for a root request
///
/// Any read failure — missing file, permission, disk error — collapses into
/// the same 500 response. The error kind is logged to stderr and never
/// reaches the client.
pub async fn serve_index(config: &Arc<Config>) -> Response<Full<Bytes>> {
    match load_index(&config.resources.index_file).await {
        Ok(content) => http::build_html_response(content),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read index file '{}': {e}",
                config.resources.index_file.display()
            ));
            http::build_500_response()
        }
    }
}

/// Read the index file from disk. Fresh read on every request, no caching.
pub async fn load_index(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("staticd-static-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_load_index_returns_exact_bytes() {
        let path = temp_path("exact.html");
        std::fs::write(&path, b"<h1>Hi</h1>").unwrap();
        let content = load_index(&path).await.unwrap();
        assert_eq!(content, b"<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_load_index_missing_file_is_err() {
        let path = temp_path("never-written.html");
        assert!(load_index(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_serve_index_failure_is_500() {
        let mut cfg = Config::new();
        cfg.resources.index_file = temp_path("absent.html");
        let resp = serve_index(&Arc::new(cfg)).await;
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }
}
