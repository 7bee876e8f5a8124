//! Error types for the package builder
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the package builder
#[derive(Error, Debug)]
pub enum BuilderError {
    /// The control file does not exist
    #[error("Control file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row in the checksum section could not be parsed
    #[error("dsc format error in {path} at line {line}: {message}")]
    DscFormat {
        message: String,
        path: PathBuf,
        line: usize,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BuilderError {
    /// Create a new not-found error
    pub fn not_found<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a new dsc format error
    pub fn dsc_format<P: Into<PathBuf>>(message: impl Into<String>, path: P, line: usize) -> Self {
        Self::DscFormat {
            message: message.into(),
            path: path.into(),
            line,
        }
    }

    /// Create a new file system error.
    ///
    /// A `NotFound` I/O error is reported as [`BuilderError::NotFound`] so
    /// callers can tell a missing file apart from other read failures.
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path, source);
        }
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error reports a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BuilderError>;
