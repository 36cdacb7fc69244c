//! Logger module
//!
//! Plain stdout/stderr logging. The startup line is the only output the
//! server produces unless access logging is switched on in the config.

use chrono::Local;
use hyper::{Method, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr) {
    println!("Server running at http://{addr}/");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_request(method: &Method, target: &str, version: Version) {
    println!("{}", format_request_line(method, target, version));
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] Sent {status} ({size} bytes)");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Access log line with a local timestamp, `[02/Jan/2026:15:04:05 +0000] "GET /"`
fn format_request_line(method: &Method, target: &str, version: Version) -> String {
    format!(
        "[{}] \"{method} {target} {version:?}\"",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    )
}
