//! Per-block rendering options

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Options recognized for a single code block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockConfig {
    /// Language name or alias. Unknown names render as plain text.
    pub language: Option<String>,
    /// Emit a copy button carrying the block's source.
    pub show_copy_button: bool,
}

impl CodeBlockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the language from a `language-*` class name, as produced by
    /// Markdown processors for fenced blocks.
    ///
    /// Class names without the prefix leave the language unset.
    pub fn from_class_name(class_name: &str) -> Self {
        let language = class_name
            .split_whitespace()
            .find_map(|class| class.strip_prefix("language-"))
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self {
            language,
            ..Self::default()
        }
    }

    /// Set the language explicitly. An explicit language always wins over one
    /// derived from a class name.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_copy_button(mut self, show: bool) -> Self {
        self.show_copy_button = show;
        self
    }

    /// The resolved language.
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .and_then(Language::from_name)
            .unwrap_or(Language::PlainText)
    }
}
