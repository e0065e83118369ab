//! Integration tests for code block rendering.

use codeblock_annotate::{Annotator, RegionScope};
use codeblock_render::{
    CodeBlockConfig, CodeBlockRenderer, Language, PlainTokenizer, SyntaxTokenizer,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const TRAINING_EXAMPLE: &str = r#"import torch
import replicate

def train():
    #highlight-start
    # Save training code and hyperparameters
    experiment = replicate.init(path=".", params={...})
    #highlight-end
    model = Model()

    for epoch in range(num_epochs):
        # ...

        torch.save(model, "model.pth")
        #highlight-start
        # Save a model weights and the metrics
        experiment.checkpoint(path="model.pth", metrics={...})
        #highlight-end"#;

fn python() -> CodeBlockConfig {
    CodeBlockConfig::new().with_language("python")
}

#[test]
fn test_training_example_lines() {
    let mut renderer = CodeBlockRenderer::default();
    let annotated = renderer.render_lines(TRAINING_EXAMPLE, &python());

    let visible: Vec<_> = annotated.iter().filter(|l| !l.exclude).collect();
    assert_eq!(visible.len(), 14);

    let emphasized: Vec<String> = visible
        .iter()
        .filter(|l| l.emphasize)
        .map(|l| l.line.text().trim().to_string())
        .collect();
    assert_eq!(
        emphasized,
        vec![
            "# Save training code and hyperparameters",
            r#"experiment = replicate.init(path=".", params={...})"#,
            "# Save a model weights and the metrics",
            r#"experiment.checkpoint(path="model.pth", metrics={...})"#,
        ]
    );
    assert!(!renderer.annotator().in_region());
}

#[test]
fn test_training_example_html_has_no_sentinels() {
    let mut renderer = CodeBlockRenderer::default();
    let html = renderer.render(TRAINING_EXAMPLE, &python());

    assert!(html.starts_with(r#"<div class="codeblock"><pre class="prism-code language-python">"#));
    assert!(!html.contains("highlight-start"));
    assert!(!html.contains("highlight-end"));
    assert_eq!(html.matches(r#"<div class="token-line line-highlight">"#).count(), 4);
    assert_eq!(html.matches(r#"<div class="token-line">"#).count(), 10);
}

#[test]
fn test_line_marker_removed_from_html() {
    let mut renderer = CodeBlockRenderer::default();
    let html = renderer.render("x = 1\ny = 2  # highlight-line", &python());

    assert!(!html.contains("highlight-line"));
    assert_eq!(html.matches(r#"<div class="token-line line-highlight">"#).count(), 1);

    let lines = renderer.render_lines("y = 2  # highlight-line", &python());
    assert_eq!(lines[0].line.text(), "y = 2  ");
    assert!(lines[0].line.tokens.iter().any(|t| t.content == "2" && t.has_type("number")));
}

#[test]
fn test_multiline_string_keeps_type_across_lines() {
    let mut renderer = CodeBlockRenderer::default();
    let code = concat!(
        "GREETING = \"\"\"\n",
        "Dear user  # not a comment\n",
        "\"\"\"\n",
        "print(GREETING)  # highlight-line",
    );
    let lines = renderer.render_lines(code, &python());

    assert!(lines[1].line.tokens.iter().all(|t| !t.has_type("comment")));
    assert!(lines[1].line.tokens.iter().any(|t| t.has_type("string")));
    assert!(lines[3].emphasize);
    assert_eq!(lines[3].line.text(), "print(GREETING)  ");
}

#[test]
fn test_html_escapes_token_text() {
    let mut renderer = CodeBlockRenderer::new(PlainTokenizer, Annotator::new());
    let html = renderer.render("if a < b && c > d:", &CodeBlockConfig::new());
    assert!(html.contains("if a &lt; b &amp;&amp; c &gt; d:"));
}

#[test]
fn test_copy_button_carries_unmodified_source() {
    let mut renderer = CodeBlockRenderer::default();
    let config = python().with_copy_button(true);
    let html = renderer.render("\n#highlight-start\nprint(\"hi\")\n#highlight-end\n", &config);

    assert!(html.contains(
        r##"<button class="copy-button" type="button" data-code="#highlight-start
print(&quot;hi&quot;)
#highlight-end">Copy</button>"##
    ));
}

#[test]
fn test_no_copy_button_by_default() {
    let mut renderer = CodeBlockRenderer::default();
    let html = renderer.render("print(1)", &python());
    assert!(!html.contains("copy-button"));
}

#[test]
fn test_custom_emphasis_class() {
    let annotator = Annotator::new().with_emphasis_class("hl");
    let mut renderer = CodeBlockRenderer::new(SyntaxTokenizer, annotator);
    let html = renderer.render("a # highlight-line", &python());
    assert!(html.contains(r#"<div class="token-line hl">"#));
}

#[test]
fn test_blank_lines_keep_height() {
    let mut renderer = CodeBlockRenderer::new(PlainTokenizer, Annotator::new());
    let html = renderer.render("a\n\nb", &CodeBlockConfig::new());
    assert!(html.contains("<div class=\"token-line\"><span class=\"token plain\">\n</span></div>"));
}

#[rstest]
#[case(RegionScope::PerBlock, false)]
#[case(RegionScope::Shared, true)]
fn test_region_scope_between_blocks(#[case] scope: RegionScope, #[case] bleeds: bool) {
    let mut renderer = CodeBlockRenderer::new(SyntaxTokenizer, Annotator::with_scope(scope));

    renderer.render("#highlight-start\nx = 1", &python());
    let second = renderer.render_lines("y = 2", &python());

    assert_eq!(second[0].emphasize, bleeds);
}

#[rstest]
#[case("language-python", Language::Python)]
#[case("language-shell-session", Language::ShellSession)]
#[case("language-rust", Language::Rust)]
#[case("", Language::PlainText)]
fn test_class_name_selects_pre_class(#[case] class_name: &str, #[case] expected: Language) {
    let mut renderer = CodeBlockRenderer::default();
    let html = renderer.render("x", &CodeBlockConfig::from_class_name(class_name));
    assert!(html.contains(&format!(r#"<pre class="prism-code language-{}">"#, expected.name())));
}

#[test]
fn test_shell_session_tokens_rendered() {
    let mut renderer = CodeBlockRenderer::default();
    let config = CodeBlockConfig::new().with_language("console");
    let html = renderer.render("$ replicate ls  # highlight-line\nEXPERIMENT  STARTED", &config);

    assert!(html.contains(r#"<span class="token shell-symbol">$</span>"#));
    assert!(html.contains(r#"<span class="token output">EXPERIMENT  STARTED</span>"#));
    assert!(html.contains(r#"<div class="token-line line-highlight">"#));
}
