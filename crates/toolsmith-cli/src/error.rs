//! Error types for toolsmith-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for toolsmith-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toolsmith-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from toolsmith-core
    #[error("{0}")]
    Core(#[from] toolsmith_core::Error),

    /// Error from the graph cloner
    #[error("Clone failed: {0}")]
    Clone(#[from] toolsmith_clone::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error with the file involved
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON input or output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error for `path`.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
