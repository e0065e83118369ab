//! Annotate command implementation
//!
//! Shows the lines of one block as they would be rendered.

use std::path::Path;

use codeblock_render::{CodeBlockConfig, CodeBlockRenderer, SyntaxTokenizer};
use serde::Serialize;

use super::{read_source, resolve_language};
use crate::error::Result;
use crate::settings::Settings;

/// One visible line of an annotated block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRow {
    /// 1-based position of the line within the trimmed block, sentinels included.
    pub line: usize,
    /// Displayed text, with single-line markers removed.
    pub text: String,
    pub emphasize: bool,
}

/// Annotate a file as a single code block.
pub fn annotate_file(
    path: &Path,
    language: Option<&str>,
    settings: &Settings,
) -> Result<Vec<AnnotatedRow>> {
    let source = read_source(path)?;
    let language = resolve_language(path, language)?;
    let config = CodeBlockConfig::new().with_language(language.name());

    let mut renderer = CodeBlockRenderer::new(SyntaxTokenizer, settings.annotator());
    let rows = renderer
        .render_lines(&source, &config)
        .into_iter()
        .enumerate()
        .filter(|(_, annotated)| annotated.is_visible())
        .map(|(idx, annotated)| AnnotatedRow {
            line: idx + 1,
            text: annotated.line.text(),
            emphasize: annotated.emphasize,
        })
        .collect();

    Ok(rows)
}

/// Run the annotate command
pub fn run_annotate(
    path: &Path,
    language: Option<&str>,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let rows = annotate_file(path, language, settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let gutter = if row.emphasize { '>' } else { ' ' };
        println!("{gutter} {:>4}  {}", row.line, row.text);
    }

    Ok(())
}
