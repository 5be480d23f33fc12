//! Error types for bind-content

/// Result type for bind-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bind-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot resolve path {path}: {reason}")]
    Resolution { path: String, reason: String },

    #[error("Unexpected manifest shape: {message}")]
    ManifestShape { message: String },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },
}

impl Error {
    pub fn resolution(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn manifest_shape(message: impl Into<String>) -> Self {
        Self::ManifestShape {
            message: message.into(),
        }
    }

    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }
}
