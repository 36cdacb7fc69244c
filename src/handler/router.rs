//! Request dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is an exact match on
//! the request target: `/` gets the index page, everything else is a 404.

use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Request, Response, Uri};
use std::convert::Infallible;
use std::sync::Arc;

/// The only request target answered with content
const ROOT_TARGET: &str = "/";

/// Main entry point for HTTP request handling
///
/// The method is deliberately not inspected; anything aimed at the root
/// target is answered like a GET.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let target = request_target(req.uri());

    if config.logging.access_log {
        logger::log_request(req.method(), target, req.version());
    }

    let response = route_request(target, &config).await;

    if config.logging.access_log {
        let size = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(
            response.status().as_u16(),
            usize::try_from(size).unwrap_or(usize::MAX),
        );
    }

    Ok(response)
}

/// Route request based on its target
async fn route_request(target: &str, config: &Arc<Config>) -> Response<Full<Bytes>> {
    if target == ROOT_TARGET {
        static_files::serve_index(config).await
    } else {
        // Unknown, malformed and query-carrying targets all land here
        http::build_404_response()
    }
}

/// Full request target including any query string.
///
/// Matching on the path component alone would let `/?x=1` reach the index;
/// only the bare `/` may.
fn request_target(uri: &Uri) -> &str {
    match uri.path_and_query() {
        Some(pq) => pq.as_str(),
        None => uri.path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    fn test_config(index_file: PathBuf) -> Arc<Config> {
        let mut cfg = Config::new();
        cfg.resources.index_file = index_file;
        Arc::new(cfg)
    }

    fn write_temp_index(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "staticd-router-{}-{name}.html",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_request_target_keeps_query() {
        assert_eq!(request_target(&Uri::from_static("/")), "/");
        assert_eq!(request_target(&Uri::from_static("/?x=1")), "/?x=1");
        assert_eq!(request_target(&Uri::from_static("/foo")), "/foo");
        assert_eq!(request_target(&Uri::from_static("/foo?a=b&c=d")), "/foo?a=b&c=d");
    }

    #[tokio::test]
    async fn test_root_serves_index_bytes() {
        let path = write_temp_index("root", "<h1>Hi</h1>");
        let resp = route_request("/", &test_config(path)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_non_root_targets_are_not_found() {
        let path = write_temp_index("other", "<h1>Hi</h1>");
        let cfg = test_config(path);
        for target in ["/foo", "//", "/?x=1", "/index.html", "/FOO"] {
            let resp = route_request(target, &cfg).await;
            assert_eq!(resp.status(), 404, "target {target}");
        }
    }

    #[tokio::test]
    async fn test_missing_index_collapses_to_500() {
        let cfg = test_config(PathBuf::from("/definitely/not/here/index.html"));
        let resp = route_request("/", &cfg).await;
        assert_eq!(resp.status(), 500);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Internal Server Error");
    }
}
