//! Line annotation driven by highlight sentinels.
//!
//! Recognized markers:
//! ```text
//! #highlight-start     opens a region (line dropped)
//! #highlight-end       closes a region (line dropped)
//! #highlight-line      emphasizes its own line (marker text removed)
//! ```
//!
//! Region sentinels match only when the whole line, with every whitespace
//! character removed, equals the sentinel. The single-line marker matches
//! anywhere in the line.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::line::{LinePresentation, SourceLine, Token};

/// Class appended to emphasized lines unless configured otherwise.
pub const DEFAULT_EMPHASIS_CLASS: &str = "line-highlight";

const REGION_START: &str = "#highlight-start";
const REGION_END: &str = "#highlight-end";

/// Whitespace-free form of the single-line marker, used for detection.
const LINE_MARKER: &str = "#highlight-line";

/// Literal variants removed from the displayed text.
const LINE_MARKER_VARIANTS: [&str; 2] = ["# highlight-line", "#highlight-line"];

/// How long the "inside region" flag lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionScope {
    /// The flag is cleared at the start of every block.
    #[default]
    PerBlock,
    /// The flag carries over from one block to the next, so an unterminated
    /// region keeps emphasizing lines in later blocks on the same page.
    Shared,
}

impl fmt::Display for RegionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerBlock => write!(f, "per-block"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

impl FromStr for RegionScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "per-block" | "block" => Ok(Self::PerBlock),
            "shared" | "page" => Ok(Self::Shared),
            other => Err(Error::UnknownRegionScope(other.to_string())),
        }
    }
}

/// The outcome of annotating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// The line with single-line markers stripped from its tokens.
    pub line: SourceLine,
    /// Whether the line should be visually emphasized.
    pub emphasize: bool,
    /// Whether the line is a sentinel that must not be rendered.
    pub exclude: bool,
}

impl AnnotatedLine {
    pub fn is_visible(&self) -> bool {
        !self.exclude
    }

    /// Build the presentation for this line, starting from the base line class.
    pub fn presentation(&self, emphasis_class: &str) -> LinePresentation {
        let mut presentation = LinePresentation::default();
        if self.emphasize {
            presentation.add_class(emphasis_class);
        }
        presentation
    }
}

/// Stateful annotator for highlight sentinels.
///
/// The region flag is the only state. With [`RegionScope::PerBlock`] it is
/// reset by [`Annotator::annotate_block`]; with [`RegionScope::Shared`] it
/// survives until [`Annotator::reset`] is called.
#[derive(Debug, Clone)]
pub struct Annotator {
    scope: RegionScope,
    in_region: bool,
    emphasis_class: String,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator {
    pub fn new() -> Self {
        Self::with_scope(RegionScope::default())
    }

    pub fn with_scope(scope: RegionScope) -> Self {
        Self {
            scope,
            in_region: false,
            emphasis_class: DEFAULT_EMPHASIS_CLASS.to_string(),
        }
    }

    /// Use a different class name for emphasized lines.
    pub fn with_emphasis_class(mut self, class: impl Into<String>) -> Self {
        self.emphasis_class = class.into();
        self
    }

    pub fn scope(&self) -> RegionScope {
        self.scope
    }

    pub fn emphasis_class(&self) -> &str {
        &self.emphasis_class
    }

    /// True while a `#highlight-start` has been seen without its `#highlight-end`.
    pub fn in_region(&self) -> bool {
        self.in_region
    }

    /// Leave any open region.
    pub fn reset(&mut self) {
        self.in_region = false;
    }

    /// Annotate every line of one code block, in source order.
    ///
    /// # Example
    /// ```
    /// use codeblock_annotate::{Annotator, SourceLine, visible_lines};
    ///
    /// let lines = ["a", "#highlight-start", "b", "#highlight-end", "c"]
    ///     .into_iter()
    ///     .map(SourceLine::from)
    ///     .collect::<Vec<_>>();
    ///
    /// let annotated = Annotator::new().annotate_block(lines);
    /// let shown: Vec<_> = visible_lines(&annotated)
    ///     .map(|l| (l.line.text(), l.emphasize))
    ///     .collect();
    /// assert_eq!(
    ///     shown,
    ///     vec![
    ///         ("a".to_string(), false),
    ///         ("b".to_string(), true),
    ///         ("c".to_string(), false),
    ///     ]
    /// );
    /// ```
    pub fn annotate_block<I>(&mut self, lines: I) -> Vec<AnnotatedLine>
    where
        I: IntoIterator<Item = SourceLine>,
    {
        if self.scope == RegionScope::PerBlock {
            self.reset();
        } else if self.in_region {
            debug!("Region left open by a previous block carries into this one");
        }

        lines
            .into_iter()
            .map(|line| self.annotate_line(line))
            .collect()
    }

    /// Annotate a single line, advancing the region flag.
    pub fn annotate_line(&mut self, mut line: SourceLine) -> AnnotatedLine {
        let (emphasize, exclude) = self.evaluate(&mut line);
        AnnotatedLine {
            line,
            emphasize,
            exclude,
        }
    }

    /// Annotate a line in place.
    ///
    /// Appends the emphasis class to `presentation` when the line is
    /// emphasized, strips single-line markers from `line`, and returns `true`
    /// when the line must be left out of the rendered output.
    pub fn annotate_in_place(
        &mut self,
        line: &mut SourceLine,
        presentation: &mut LinePresentation,
    ) -> bool {
        let (emphasize, exclude) = self.evaluate(line);
        if emphasize {
            presentation.add_class(self.emphasis_class.as_str());
        }
        exclude
    }

    fn evaluate(&mut self, line: &mut SourceLine) -> (bool, bool) {
        let collapsed = collapse_whitespace(&line.text());
        let mut emphasize = false;
        let mut exclude = false;

        if collapsed.contains(LINE_MARKER) {
            emphasize = true;
            strip_line_markers(line);
        }

        if self.in_region && collapsed == REGION_END {
            debug!("Leaving highlight region");
            self.in_region = false;
            exclude = true;
        }

        if collapsed == REGION_START {
            debug!("Entering highlight region");
            self.in_region = true;
            exclude = true;
        }

        if self.in_region {
            emphasize = true;
        }

        if exclude {
            trace!(sentinel = %collapsed, "Excluding sentinel line");
        }

        (emphasize, exclude)
    }
}

/// Iterate over the lines that should be rendered.
pub fn visible_lines(annotated: &[AnnotatedLine]) -> impl Iterator<Item = &AnnotatedLine> {
    annotated.iter().filter(|l| l.is_visible())
}

/// Remove every whitespace character from `text`.
pub fn collapse_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove `# highlight-line` and `#highlight-line` from a line's text.
///
/// Markers may straddle token boundaries; the bytes are removed from whichever
/// tokens hold them, and tokens left empty are dropped. Removal repeats until
/// neither variant remains, so the result never contains a marker even when
/// removing one joins the text around it into another.
///
/// Returns `true` if anything was removed.
pub fn strip_line_markers(line: &mut SourceLine) -> bool {
    let mut removed = false;

    loop {
        let text = line.text();
        let earliest = LINE_MARKER_VARIANTS
            .iter()
            .filter_map(|marker| text.find(marker).map(|pos| pos..pos + marker.len()))
            .min_by_key(|range| range.start);

        let Some(range) = earliest else {
            break;
        };
        remove_range(&mut line.tokens, range);
        removed = true;
    }

    if removed {
        line.tokens.retain(|t| !t.content.is_empty());
    }
    removed
}

/// Remove a byte range of the concatenated token text from the tokens.
fn remove_range(tokens: &mut [Token], range: Range<usize>) {
    let mut offset = 0;
    for token in tokens.iter_mut() {
        let start = offset;
        let end = offset + token.content.len();
        offset = end;

        if end <= range.start || start >= range.end {
            continue;
        }

        let from = range.start.max(start) - start;
        let to = range.end.min(end) - start;
        token.content.replace_range(from..to, "");
    }
}
