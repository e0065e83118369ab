//! HTML output for annotated code blocks.
//!
//! Markup shape:
//! ```text
//! <div class="codeblock">
//!   <button class="copy-button" ...>Copy</button>        (optional)
//!   <pre class="prism-code language-python">
//!     <div class="token-line line-highlight">
//!       <span class="token keyword">def</span>...
//!     </div>
//!   </pre>
//! </div>
//! ```
//! Whitespace between elements is not emitted; it is shown above for reading.

use codeblock_annotate::{AnnotatedLine, Annotator, SourceLine, visible_lines};
use tracing::debug;

use crate::config::CodeBlockConfig;
use crate::tokenizer::{SyntaxTokenizer, Tokenizer};

/// Renders code blocks through a tokenizer and an [`Annotator`].
///
/// The renderer owns the annotator, so with [`codeblock_annotate::RegionScope::Shared`]
/// an unterminated region in one block carries into the next block rendered
/// by the same renderer.
#[derive(Debug)]
pub struct CodeBlockRenderer<T = SyntaxTokenizer> {
    tokenizer: T,
    annotator: Annotator,
}

impl Default for CodeBlockRenderer<SyntaxTokenizer> {
    fn default() -> Self {
        Self::new(SyntaxTokenizer, Annotator::new())
    }
}

impl<T: Tokenizer> CodeBlockRenderer<T> {
    pub fn new(tokenizer: T, annotator: Annotator) -> Self {
        Self {
            tokenizer,
            annotator,
        }
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    /// Tokenize and annotate a block without producing markup.
    ///
    /// Surrounding whitespace of `code` is trimmed first.
    pub fn render_lines(&mut self, code: &str, config: &CodeBlockConfig) -> Vec<AnnotatedLine> {
        let language = config.language();
        let lines = self.tokenizer.tokenize(code.trim(), language);
        debug!(%language, lines = lines.len(), "Annotating code block");
        self.annotator.annotate_block(lines)
    }

    /// Render a block to HTML.
    pub fn render(&mut self, code: &str, config: &CodeBlockConfig) -> String {
        let language = config.language();
        let annotated = self.render_lines(code, config);

        let mut html = String::from(r#"<div class="codeblock">"#);
        if config.show_copy_button {
            html.push_str(&format!(
                r#"<button class="copy-button" type="button" data-code="{}">Copy</button>"#,
                escape_html(code.trim())
            ));
        }
        html.push_str(&format!(
            r#"<pre class="prism-code language-{}">"#,
            language.name()
        ));

        for line in visible_lines(&annotated) {
            let presentation = line.presentation(self.annotator.emphasis_class());
            html.push_str(&format!(
                r#"<div class="{}">"#,
                escape_html(&presentation.class_name())
            ));
            push_tokens(&mut html, &line.line);
            html.push_str("</div>");
        }

        html.push_str("</pre></div>");
        html
    }
}

fn push_tokens(html: &mut String, line: &SourceLine) {
    if line.is_empty() {
        // Keeps blank lines at full height inside the <pre>.
        html.push_str("<span class=\"token plain\">\n</span>");
        return;
    }

    for token in line.tokens.iter().filter(|t| !t.content.is_empty()) {
        let class = if token.types.is_empty() {
            "token plain".to_string()
        } else {
            format!("token {}", token.types.join(" "))
        };
        html.push_str(&format!(
            r#"<span class="{}">{}</span>"#,
            escape_html(&class),
            escape_html(&token.content)
        ));
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
