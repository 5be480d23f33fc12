//! Error types for bind-core

/// Result type for bind-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing artifacts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] bind_content::Error),

    #[error(transparent)]
    Fs(#[from] bind_fs::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template expansion failed: {message}")]
    Template { message: String },

    #[error("Expanded local-dev config for {service} is not valid JSON: {message}")]
    ConfigExpansion { service: String, message: String },
}

impl Error {
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn config_expansion(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigExpansion {
            service: service.into(),
            message: message.into(),
        }
    }
}
