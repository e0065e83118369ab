//! Tokenized lines and their presentation descriptors

use serde::{Deserialize, Serialize};

/// Class every rendered line carries before any emphasis is applied.
pub const BASE_LINE_CLASS: &str = "token-line";

/// A run of text with the style metadata assigned by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    /// The literal text of the token.
    pub content: String,
    /// Token type names, e.g. `["comment"]` or `["string"]`. Empty for plain text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

impl Token {
    /// Create a token with the given content and type names.
    pub fn new<I, S>(content: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: content.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an untyped token.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            types: Vec::new(),
        }
    }

    /// Check whether the token carries the given type name.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }
}

/// One line of a code block as an ordered sequence of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLine {
    pub tokens: Vec<Token>,
}

impl SourceLine {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Build a line holding a single untyped token.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            tokens: vec![Token::plain(text)],
        }
    }

    /// The full text of the line, i.e. all token contents concatenated.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }

    /// True when the line has no visible text.
    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|t| t.content.is_empty())
    }
}

impl From<&str> for SourceLine {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Display attributes attached to a rendered line.
///
/// Classes are only ever appended; nothing replaces the existing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePresentation {
    pub classes: Vec<String>,
}

impl Default for LinePresentation {
    fn default() -> Self {
        Self {
            classes: vec![BASE_LINE_CLASS.to_string()],
        }
    }
}

impl LinePresentation {
    /// Append a class. Adding a class that is already present is a no-op.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The space-separated class attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}
