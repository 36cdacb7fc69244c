//! HTTP response building module
//!
//! The server only ever produces three response shapes: the index page, a
//! plain-text 404 and a plain-text 500. Bodies and content types are fixed;
//! callers must not vary them per error kind.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

pub const NOT_FOUND_BODY: &str = "Not Found";
pub const SERVER_ERROR_BODY: &str = "Internal Server Error";

/// Build 200 OK response carrying the index page verbatim
pub fn build_html_response(content: Vec<u8>) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Build 500 Internal Server Error response
///
/// Every index read failure collapses into this one response; the underlying
/// I/O error kind never reaches the client.
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(SERVER_ERROR_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from(SERVER_ERROR_BODY)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
