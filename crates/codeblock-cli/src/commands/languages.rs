//! Languages command implementation

use codeblock_render::Language;

use crate::error::Result;

/// Run the languages command
pub fn run_languages() -> Result<()> {
    for language in Language::ALL {
        let comment = language.comment_style().prefix().unwrap_or("-");
        println!("{:<14} {}", language.name(), comment);
    }
    Ok(())
}
