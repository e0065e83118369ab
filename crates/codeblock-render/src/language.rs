//! Language detection and per-language lexical details

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Languages the tokenizer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Python,
    Shell,
    ShellSession,
    JavaScript,
    TypeScript,
    Rust,
    Go,
    Toml,
    Yaml,
    Json,
    Markdown,
    PlainText,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 12] = [
        Self::Python,
        Self::Shell,
        Self::ShellSession,
        Self::JavaScript,
        Self::TypeScript,
        Self::Rust,
        Self::Go,
        Self::Toml,
        Self::Yaml,
        Self::Json,
        Self::Markdown,
        Self::PlainText,
    ];

    /// Look up a language by name or common alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "python" | "py" => Some(Self::Python),
            "shell" | "sh" | "bash" | "zsh" => Some(Self::Shell),
            "shell-session" | "console" | "terminal" => Some(Self::ShellSession),
            "javascript" | "js" | "jsx" => Some(Self::JavaScript),
            "typescript" | "ts" | "tsx" => Some(Self::TypeScript),
            "rust" | "rs" => Some(Self::Rust),
            "go" | "golang" => Some(Self::Go),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "markdown" | "md" | "mdx" => Some(Self::Markdown),
            "text" | "txt" | "plain" | "plaintext" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detect a language from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "sh" | "bash" | "zsh" => Some(Self::Shell),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "md" | "markdown" | "mdx" => Some(Self::Markdown),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Canonical name, as used in `language-*` class names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Shell => "shell",
            Self::ShellSession => "shell-session",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::PlainText => "text",
        }
    }

    /// Line comment syntax
    pub fn comment_style(&self) -> CommentStyle {
        match self {
            Self::Python | Self::Shell | Self::ShellSession | Self::Toml | Self::Yaml => {
                CommentStyle::Hash
            }
            Self::JavaScript | Self::TypeScript | Self::Rust | Self::Go => {
                CommentStyle::DoubleSlash
            }
            Self::Json | Self::Markdown | Self::PlainText => CommentStyle::None,
        }
    }

    /// Extension or name used to find the bundled grammar.
    ///
    /// `None` means the language is shown as plain text. TypeScript borrows the
    /// JavaScript grammar.
    pub fn syntax_token(&self) -> Option<&'static str> {
        match self {
            Self::Python => Some("py"),
            Self::Shell | Self::ShellSession => Some("sh"),
            Self::JavaScript | Self::TypeScript => Some("js"),
            Self::Rust => Some("rs"),
            Self::Go => Some("go"),
            Self::Toml => Some("toml"),
            Self::Yaml => Some("yaml"),
            Self::Json => Some("json"),
            Self::Markdown | Self::PlainText => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// Line comment syntax styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Hash: `# comment`
    Hash,
    /// Double slash: `// comment`
    DoubleSlash,
    /// No line comments
    None,
}

impl CommentStyle {
    /// The text that opens a line comment, if any.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Hash => Some("#"),
            Self::DoubleSlash => Some("//"),
            Self::None => None,
        }
    }
}
