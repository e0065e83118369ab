//! Tokenizing and HTML rendering of annotated code blocks.
//!
//! The pipeline for one block is:
//!
//! 1. [`Tokenizer`] splits the (trimmed) source into [`SourceLine`]s.
//! 2. [`codeblock_annotate::Annotator`] decides emphasis and exclusion per line.
//! 3. [`CodeBlockRenderer`] writes the visible lines as HTML.
//!
//! [`markdown`] applies the same pipeline to every fenced block of a page.
//!
//! [`SourceLine`]: codeblock_annotate::SourceLine

pub mod config;
pub mod error;
pub mod html;
pub mod language;
pub mod markdown;
pub mod tokenizer;

pub use config::CodeBlockConfig;
pub use error::{Error, Result};
pub use html::{CodeBlockRenderer, escape_html};
pub use language::{CommentStyle, Language};
pub use markdown::{Fence, find_fences, render_markdown};
pub use tokenizer::{PlainTokenizer, SyntaxTokenizer, Tokenizer};
