//! Server configuration

use serde::{Deserialize, Serialize};

/// Media streaming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Read buffer size used when streaming files from disk, in bytes
    pub buffer_size: usize,

    /// Upper bound for the body of an open-ended range request (`bytes=N-`).
    /// `None` serves through to the end of the file.
    pub max_range_bytes: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            max_range_bytes: None,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Streaming configuration
    pub stream: StreamConfig,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Origins allowed to make cross-origin requests when CORS is enabled
    pub cors_origins: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,
}

/// Origins of the player's web view, dev server included
pub fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "tauri://localhost",
        "http://tauri.localhost",
    ]
    .iter()
    .map(|o| o.to_string())
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3456,
            stream: StreamConfig::default(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
