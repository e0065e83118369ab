//! Error types for codeblock-annotate

/// Result type for codeblock-annotate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codeblock-annotate operations
///
/// Annotation itself is total over any input. The only fallible surface is
/// parsing user-supplied names, such as a region scope read from settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown region scope: {0} (expected \"per-block\" or \"shared\")")]
    UnknownRegionScope(String),
}
