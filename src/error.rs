//! Error handling for cookie-export

use thiserror::Error;

/// Main error type for cookie export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Browser cookie error: {0}")]
    BrowserCookie(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0} already exists, refusing to overwrite")]
    OutputExists(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for cookie export operations
pub type Result<T> = std::result::Result<T, ExportError>;
