//! Splitting source text into lines of typed tokens.
//!
//! [`SyntaxTokenizer`] runs the bundled Sublime Text grammars through
//! `syntect`. Parse state is carried from one line to the next, so strings
//! and comments spanning several lines keep their type. Grammar scopes are
//! reduced to the short token type names the stylesheet targets.

use std::sync::LazyLock;

use codeblock_annotate::{SourceLine, Token};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use tracing::{debug, warn};

use crate::language::Language;

/// Produces tokenized lines from source text
pub trait Tokenizer {
    /// Tokenize `code` into one [`SourceLine`] per line.
    ///
    /// `\r\n` line endings are treated as `\n`. An empty input yields a single
    /// empty line.
    fn tokenize(&self, code: &str, language: Language) -> Vec<SourceLine>;
}

/// Tokenizer that keeps every line as a single untyped token
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, code: &str, _language: Language) -> Vec<SourceLine> {
        split_lines(code).map(SourceLine::from_text).collect()
    }
}

/// Grammar-driven tokenizer backed by syntect's default syntaxes.
///
/// Languages without a bundled grammar fall back to [`PlainTokenizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxTokenizer;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Scopes that type everything nested inside them.
static ENCLOSING_TYPES: LazyLock<Vec<(Scope, &'static str)>> =
    LazyLock::new(|| scope_table(&[("comment", "comment"), ("string", "string")]));

/// Scope prefixes mapped to token types, checked from the innermost scope out.
static SCOPE_TYPES: LazyLock<Vec<(Scope, &'static str)>> = LazyLock::new(|| {
    scope_table(&[
        ("constant.numeric", "number"),
        ("constant.language", "boolean"),
        ("keyword.operator", "operator"),
        ("keyword", "keyword"),
        ("storage", "keyword"),
        ("entity.name.function", "function"),
        ("support.function", "function"),
        ("entity.name.class", "class-name"),
        ("entity.name.type", "class-name"),
        ("support.class", "class-name"),
        ("support.type", "class-name"),
        ("punctuation", "punctuation"),
    ])
});

fn scope_table(entries: &[(&str, &'static str)]) -> Vec<(Scope, &'static str)> {
    entries
        .iter()
        .map(|(selector, kind)| (Scope::new(selector).expect("Invalid scope selector"), *kind))
        .collect()
}

impl Tokenizer for SyntaxTokenizer {
    fn tokenize(&self, code: &str, language: Language) -> Vec<SourceLine> {
        let Some(syntax) = find_syntax(language) else {
            return PlainTokenizer.tokenize(code, language);
        };

        let mut parser = LineParser::new(syntax);
        split_lines(code)
            .map(|line| match language {
                Language::ShellSession => parser.session_line(line),
                _ => SourceLine::new(parser.tokens(line)),
            })
            .collect()
    }
}

fn find_syntax(language: Language) -> Option<&'static SyntaxReference> {
    let token = language.syntax_token()?;
    let syntax = SYNTAXES.find_syntax_by_token(token);
    if syntax.is_none() {
        debug!(%language, "No bundled grammar, tokenizing as plain text");
    }
    syntax
}

fn split_lines(code: &str) -> impl Iterator<Item = &str> {
    code.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parse state for one block, advanced line by line.
struct LineParser {
    /// `None` once the grammar has failed; later lines stay untyped.
    state: Option<ParseState>,
    stack: ScopeStack,
}

impl LineParser {
    fn new(syntax: &SyntaxReference) -> Self {
        Self {
            state: Some(ParseState::new(syntax)),
            stack: ScopeStack::new(),
        }
    }

    /// `$ command` lines get a prompt symbol and shell tokens; the rest is output.
    fn session_line(&mut self, line: &str) -> SourceLine {
        if let Some(command) = line.strip_prefix('$') {
            let mut tokens = vec![Token::new("$", ["shell-symbol"])];
            tokens.extend(self.tokens(command));
            return SourceLine::new(tokens);
        }
        if line.is_empty() {
            return SourceLine::default();
        }
        SourceLine::new(vec![Token::new(line, ["output"])])
    }

    fn tokens(&mut self, line: &str) -> Vec<Token> {
        let Some(state) = self.state.as_mut() else {
            return untyped(line);
        };

        // Grammars are loaded in newline mode and expect the terminator.
        let terminated = format!("{line}\n");
        let ops = match state.parse_line(&terminated, &SYNTAXES) {
            Ok(ops) => ops,
            Err(err) => {
                warn!(error = ?err, "Grammar failed, leaving remaining lines untyped");
                self.state = None;
                return untyped(line);
            }
        };

        let mut builder = LineBuilder::default();
        let mut start = 0;
        for (index, op) in &ops {
            let end = (*index).min(line.len());
            if end > start {
                builder.push(&line[start..end], token_type(self.stack.as_slice()));
                start = end;
            }
            if let Err(err) = self.stack.apply(op) {
                warn!(error = ?err, "Scope stack out of sync, leaving remaining lines untyped");
                self.state = None;
                builder.push(&line[start..], None);
                return builder.finish();
            }
        }
        if start < line.len() {
            builder.push(&line[start..], token_type(self.stack.as_slice()));
        }

        builder.finish()
    }
}

fn untyped(line: &str) -> Vec<Token> {
    SourceLine::from_text(line).tokens
}

/// Reduce a scope stack to a single token type name.
///
/// Comments and strings win over anything nested inside them, so a quote in
/// a comment or a `#` in a string does not split the token.
fn token_type(scopes: &[Scope]) -> Option<&'static str> {
    let enclosing = ENCLOSING_TYPES
        .iter()
        .find(|(prefix, _)| scopes.iter().any(|scope| prefix.is_prefix_of(*scope)));
    if let Some((_, kind)) = enclosing {
        return Some(*kind);
    }

    scopes.iter().rev().find_map(|scope| {
        SCOPE_TYPES
            .iter()
            .find(|(prefix, _)| prefix.is_prefix_of(*scope))
            .map(|(_, kind)| *kind)
    })
}

/// Accumulates tokens, merging adjacent runs of the same type.
#[derive(Default)]
struct LineBuilder {
    tokens: Vec<Token>,
}

impl LineBuilder {
    fn push(&mut self, text: &str, kind: Option<&str>) {
        if text.is_empty() {
            return;
        }
        match self.tokens.last_mut() {
            Some(last) if last.types.first().map(String::as_str) == kind => {
                last.content.push_str(text)
            }
            _ => self.tokens.push(Token::new(text, kind)),
        }
    }

    fn finish(self) -> Vec<Token> {
        self.tokens
    }
}
