//! Render command implementation
//!
//! Writes HTML for a single source file or for every fence of a Markdown page.

use std::path::Path;

use codeblock_render::{CodeBlockConfig, CodeBlockRenderer, SyntaxTokenizer, render_markdown};
use colored::Colorize;
use tracing::debug;

use super::{is_markdown, read_source, resolve_language};
use crate::error::{CliError, Result};
use crate::settings::Settings;

/// Render a file to an HTML string.
///
/// Markdown pages are rendered fence by fence unless a language is forced,
/// in which case the whole file is treated as one block of that language.
pub fn render_to_string(
    path: &Path,
    language: Option<&str>,
    copy_button: bool,
    settings: &Settings,
) -> Result<String> {
    let source = read_source(path)?;
    let show_copy_button = copy_button || settings.show_copy_button;
    let mut renderer = CodeBlockRenderer::new(SyntaxTokenizer, settings.annotator());

    if language.is_none() && is_markdown(path) {
        debug!(path = %path.display(), "Rendering Markdown page");
        return Ok(render_markdown(&mut renderer, &source, show_copy_button));
    }

    let language = resolve_language(path, language)?;
    let config = CodeBlockConfig::new()
        .with_language(language.name())
        .with_copy_button(show_copy_button);
    Ok(renderer.render(&source, &config))
}

/// Run the render command
pub fn run_render(
    path: &Path,
    language: Option<&str>,
    copy_button: bool,
    output: Option<&Path>,
    settings: &Settings,
) -> Result<()> {
    let mut html = render_to_string(path, language, copy_button, settings)?;
    if !html.ends_with('\n') {
        html.push('\n');
    }

    match output {
        Some(out) => {
            std::fs::write(out, &html).map_err(|e| CliError::file(out, e))?;
            eprintln!("{} Wrote {}", "OK".green().bold(), out.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}
