//! Error types for codeblock-clipboard

/// Result type for codeblock-clipboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codeblock-clipboard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to write to clipboard: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard store is poisoned")]
    Poisoned,

    #[error("Copy confirmation requires a running tokio runtime")]
    NoRuntime,
}
