// Configuration types module
// Defines all configuration-related data structures

use std::path::PathBuf;

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 3000;
/// Default index file, resolved against the process working directory
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Main configuration structure
///
/// Built in code with fixed defaults. No file or environment source exists;
/// the bind address and index file are fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker thread count, `None` means one per CPU core
    pub workers: Option<usize>,
}

/// Served resources configuration
#[derive(Debug, Clone)]
pub struct ResourcesConfig {
    /// The one file served for root requests
    pub index_file: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Per-request logging; off keeps process output to the startup line
    pub access_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { access_log: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            resources: ResourcesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
