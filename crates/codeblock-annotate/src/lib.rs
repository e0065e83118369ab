//! Highlight-marker annotation for code blocks.
//!
//! Code blocks on documentation pages mark lines for emphasis with comment
//! sentinels embedded in the source itself:
//!
//! ```text
//! def train():
//!     #highlight-start
//!     experiment = replicate.init(path=".")
//!     #highlight-end
//!     model = Model()  # highlight-line
//! ```
//!
//! - `#highlight-start` / `#highlight-end` open and close a region. Every line
//!   inside the region is emphasized and the sentinel lines themselves are
//!   dropped from the output.
//! - `#highlight-line` emphasizes the line it sits on and is stripped from the
//!   displayed text.
//!
//! Region sentinels are compared with all whitespace removed, so
//! `  # highlight-end ` closes a region just like `#highlight-end`.
//!
//! The [`Annotator`] consumes lines produced by a tokenizer ([`SourceLine`])
//! and yields one [`AnnotatedLine`] per input line. Renderers skip lines whose
//! `exclude` flag is set and add the emphasis class to the rest as needed.

pub mod annotator;
pub mod error;
pub mod line;

pub use annotator::{
    AnnotatedLine, Annotator, DEFAULT_EMPHASIS_CLASS, RegionScope, collapse_whitespace,
    strip_line_markers, visible_lines,
};
pub use error::{Error, Result};
pub use line::{BASE_LINE_CLASS, LinePresentation, SourceLine, Token};
