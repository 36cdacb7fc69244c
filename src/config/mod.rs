// Configuration module entry point
// Owns the fixed startup configuration for the process

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{
    Config, LoggingConfig, ResourcesConfig, ServerConfig, DEFAULT_HOST, DEFAULT_INDEX_FILE,
    DEFAULT_PORT,
};

impl Config {
    /// Build the process configuration.
    ///
    /// Everything is fixed at startup; there are no flags, no config file and
    /// no environment lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
