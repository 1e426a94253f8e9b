use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the course server
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Missing path parameter")]
    MissingPath,

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory listing failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unsupported subtitle file: {0}")]
    UnsupportedSubtitle(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StudyError>;
