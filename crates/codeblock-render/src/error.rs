//! Error types for codeblock-render

/// Result type for codeblock-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codeblock-render operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}
