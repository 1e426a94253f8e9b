//! Application state management
//!
//! Handlers share the server configuration through `AppState`. Scans keep
//! no state here; every request works from the filesystem directly.

use crate::config::ServerConfig;
use std::time::Instant;

/// Application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
