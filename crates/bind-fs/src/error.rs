//! Error types for bind-fs

use std::path::PathBuf;

/// Result type for bind-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bind-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConfigParse {
            path: path.into(),
            format: format.into(),
            message: message.into(),
        }
    }
}
