//! HTTP protocol layer module
//!
//! Response construction, decoupled from request dispatch.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_500_response, build_html_response};
