use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a keymap file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keymap file does not exist.
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
