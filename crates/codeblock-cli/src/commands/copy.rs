//! Copy command implementation
//!
//! Sends a block's source to the terminal clipboard via OSC 52.

use std::path::Path;

use codeblock_clipboard::{CopyButton, Osc52Clipboard};
use codeblock_render::find_fences;
use colored::Colorize;

use super::{is_markdown, read_source};
use crate::error::{CliError, Result};
use crate::settings::Settings;

/// The text a copy button on this block would copy.
///
/// For Markdown pages this is the `block`-th fence (1-based); otherwise the
/// whole file. Surrounding whitespace is trimmed; highlight markers are kept.
pub fn copy_source(path: &Path, block: usize) -> Result<String> {
    let source = read_source(path)?;
    if !is_markdown(path) {
        return Ok(source.trim().to_string());
    }

    let fences = find_fences(&source);
    block
        .checked_sub(1)
        .and_then(|idx| fences.get(idx))
        .map(|fence| fence.code.trim().to_string())
        .ok_or_else(|| {
            CliError::user(format!(
                "No code block {} in {} ({} found)",
                block,
                path.display(),
                fences.len()
            ))
        })
}

/// Run the copy command
pub fn run_copy(path: &Path, block: usize, settings: &Settings) -> Result<()> {
    let source = copy_source(path, block)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let mut button = CopyButton::new(Osc52Clipboard::new(std::io::stdout()))
            .with_reset_after(settings.copy_reset_after());
        button.copy(&source)?;

        eprintln!(
            "{} {} lines sent to the clipboard",
            format!("[{}]", button.label()).green().bold(),
            source.lines().count()
        );
        Ok::<(), CliError>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_copy_source_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("train.py");
        fs::write(&path, "\n#highlight-start\nx = 1\n#highlight-end\n\n").unwrap();

        assert_eq!(
            copy_source(&path, 1).unwrap(),
            "#highlight-start\nx = 1\n#highlight-end"
        );
    }

    #[test]
    fn test_copy_source_markdown_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "```sh\nfirst\n```\n\n```py\nsecond\n```\n").unwrap();

        assert_eq!(copy_source(&path, 2).unwrap(), "second");
        assert!(matches!(copy_source(&path, 3), Err(CliError::User { .. })));
        assert!(matches!(copy_source(&path, 0), Err(CliError::User { .. })));
    }
}
