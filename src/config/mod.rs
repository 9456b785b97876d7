//! Keymap file loading.
//!
//! This module turns the path given on the command line into keymap text:
//!
//! - **Existence check**: a missing file is its own error, separate from
//!   other I/O failures
//! - **Symlink warnings**: Logged but allowed
//!
//! The path is used exactly as given. A leading `~` is a literal directory
//! name here; expanding it is left to the shell.
//!
//! # Example
//!
//! ```no_run
//! use zmk_keymap_validator::config::KeymapFile;
//!
//! let keymap = KeymapFile::open("zmk-config/config/corne.keymap")?;
//! let content = keymap.read()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A keymap file that existed when it was opened.
#[derive(Debug)]
pub struct KeymapFile {
    path: PathBuf,
}

impl KeymapFile {
    /// Checks that `path` exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if nothing exists at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        // Warn if keymap is a symlink (but allow it)
        if path.read_link().is_ok() {
            warn!(path = %path.display(), "keymap file is a symlink");
        }

        debug!(path = %path.display(), "opened keymap");
        Ok(Self { path })
    }

    /// Returns the keymap path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole keymap as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read (permissions,
    /// removed since `open`, invalid UTF-8).
    pub fn read(&self) -> Result<String, ConfigError> {
        let content = fs::read_to_string(&self.path)?;
        debug!(bytes = content.len(), lines = content.lines().count(), "read keymap");
        Ok(content)
    }
}

#[cfg(test)]
mod tests;
