//! Fenced code blocks in Markdown pages.
//!
//! Fences are found with a CommonMark parser, so backtick and tilde fences,
//! fences indented inside list items and fences in blockquotes are all
//! recognized:
//! ```text
//! - Train the model:
//!
//!   ~~~python
//!   def train():
//!       #highlight-start
//!       ...
//!   ~~~
//! ```
//! The container indentation is removed from the code, so nested lines keep
//! their indentation relative to the fence. A fence that never closes runs to
//! the end of its container.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::config::CodeBlockConfig;
use crate::html::CodeBlockRenderer;
use crate::tokenizer::Tokenizer;

/// A fenced code block found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// The full info string after the opening fence, trimmed.
    pub info: String,
    /// First word of the info string, if any.
    pub language: Option<String>,
    /// The lines between the fences, joined with `\n`.
    pub code: String,
    /// The 1-based line number of the opening fence.
    pub start_line: usize,
    /// The 1-based line number of the closing fence (or the last line).
    pub end_line: usize,
    /// Byte range of the whole fence in the document, closing line included.
    pub span: Range<usize>,
}

struct OpenFence {
    info: String,
    span: Range<usize>,
    code: String,
}

impl OpenFence {
    fn finish(self, markdown: &str) -> Fence {
        let language = self.info.split_whitespace().next().map(str::to_string);
        let code = self.code.replace("\r\n", "\n");
        let code = code.strip_suffix('\n').unwrap_or(&code).to_string();
        let last_byte = self.span.end.saturating_sub(1).max(self.span.start);

        Fence {
            info: self.info,
            language,
            code,
            start_line: line_of(markdown, self.span.start),
            end_line: line_of(markdown, last_byte),
            span: self.span,
        }
    }
}

/// 1-based line number of the byte at `offset`.
fn line_of(markdown: &str, offset: usize) -> usize {
    markdown.as_bytes()[..offset.min(markdown.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Find every fenced code block in `markdown`, in document order.
///
/// Indented code blocks are not fences and are skipped.
///
/// # Example
/// ```
/// use codeblock_render::find_fences;
///
/// let page = "Intro\n\n```python\nimport replicate\n```\n";
/// let fences = find_fences(page);
/// assert_eq!(fences.len(), 1);
/// assert_eq!(fences[0].language.as_deref(), Some("python"));
/// assert_eq!(fences[0].code, "import replicate");
/// ```
pub fn find_fences(markdown: &str) -> Vec<Fence> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut fences = Vec::new();
    let mut open: Option<OpenFence> = None;

    for (event, range) in Parser::new_ext(markdown, options).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                open = Some(OpenFence {
                    info: info.trim().to_string(),
                    span: range,
                    code: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(fence) = open.as_mut() {
                    fence.code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(fence) = open.take() {
                    fences.push(fence.finish(markdown));
                }
            }
            _ => {}
        }
    }

    fences
}

/// Replace every fenced block in `markdown` with its rendered HTML.
///
/// Text outside fences is copied through unchanged. Blocks are rendered in
/// document order with the same renderer, so the annotator's region scope
/// decides whether an unterminated region bleeds into later blocks.
pub fn render_markdown<T: Tokenizer>(
    renderer: &mut CodeBlockRenderer<T>,
    markdown: &str,
    show_copy_button: bool,
) -> String {
    let fences = find_fences(markdown);
    debug!(count = fences.len(), "Rendering fenced code blocks");

    let mut out = String::with_capacity(markdown.len());
    let mut cursor = 0;

    for fence in &fences {
        out.push_str(&markdown[cursor..fence.span.start]);

        let config = CodeBlockConfig {
            language: fence.language.clone(),
            show_copy_button,
        };
        out.push_str(&renderer.render(&fence.code, &config));
        if markdown[..fence.span.end].ends_with('\n') {
            out.push('\n');
        }

        cursor = fence.span.end;
    }

    out.push_str(&markdown[cursor..]);
    out
}
