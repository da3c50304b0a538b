//! Error types for notebook reading and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Error type for notebook operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// I/O error when reading the notebook file
    #[error("failed to read notebook {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or a field has the wrong shape
    #[error("failed to parse notebook JSON")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that is not a notebook
    #[error("invalid notebook format: {0}")]
    InvalidFormat(String),

    /// Notebook version we cannot read
    #[error("unsupported notebook version: {major}.{minor}")]
    UnsupportedVersion { major: u32, minor: u32 },

    /// Configuration file could not be loaded
    #[error("config error: {0}")]
    Config(String),
}

impl NotebookError {
    /// True for errors caused by the file itself being unavailable, as
    /// opposed to a file that was read but is not a usable notebook.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;
