//! Error types for bind-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bind-core
    #[error(transparent)]
    Core(#[from] bind_core::Error),

    /// Error from bind-fs
    #[error(transparent)]
    Fs(#[from] bind_fs::Error),

    /// Error from bind-meta (unknown language or service tag)
    #[error(transparent)]
    Meta(#[from] bind_meta::Error),
}
