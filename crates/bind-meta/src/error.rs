//! Error types for bind-meta

/// Result type for bind-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bind-meta operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown service: {name}")]
    UnknownService { name: String },

    #[error("Unknown language target: {name}")]
    UnknownLanguage { name: String },
}
