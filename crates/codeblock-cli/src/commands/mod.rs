//! Command implementations for codeblock-cli

pub mod annotate;
pub mod copy;
pub mod languages;
pub mod render;

pub use annotate::{AnnotatedRow, annotate_file, run_annotate};
pub use copy::{copy_source, run_copy};
pub use languages::run_languages;
pub use render::{render_to_string, run_render};

use std::path::Path;

use codeblock_render::Language;

use crate::error::{CliError, Result};

/// Read a source file as text.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::file(path, e))
}

/// Markdown pages are rendered fence by fence.
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "md" | "markdown" | "mdx"))
}

/// The language named on the command line, else the one implied by the
/// file extension, else plain text.
pub(crate) fn resolve_language(path: &Path, flag: Option<&str>) -> Result<Language> {
    if let Some(name) = flag {
        return Ok(name.parse::<Language>()?);
    }
    Ok(path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        .unwrap_or(Language::PlainText))
}
