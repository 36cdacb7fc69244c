//! staticd - a single-page static HTTP server
//!
//! Listens on a fixed address, serves one HTML file at the root path and
//! answers every other request target with a plain-text 404. The index file
//! is read from disk on every request, so edits show up without a restart.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
