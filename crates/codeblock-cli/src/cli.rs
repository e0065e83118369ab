//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Codeblock - Render code blocks with highlight markers
#[derive(Parser, Debug)]
#[command(name = "codeblock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (.toml, .json, .yaml); defaults to ./codeblock.toml if present
    #[arg(short, long, global = true, env = "CODEBLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the region scope from settings (per-block or shared)
    #[arg(long, global = true)]
    pub region_scope: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render a source file or Markdown page to HTML
    ///
    /// Markdown files (.md, .markdown, .mdx) have every fenced block rendered
    /// in place. Any other file is rendered as a single code block.
    ///
    /// Examples:
    ///   codeblock render docs/index.md              # Render all fences
    ///   codeblock render train.py --copy-button     # One block with a copy button
    ///   codeblock render snippet.txt -l shell -o out.html
    Render {
        /// File to render
        file: PathBuf,

        /// Language of the block (detected from the extension if omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Include a copy button in each block
        #[arg(long)]
        copy_button: bool,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which lines of a code block are emphasized
    ///
    /// Sentinel lines are dropped; emphasized lines are marked with `>`.
    Annotate {
        /// File holding a single code block
        file: PathBuf,

        /// Language of the block (detected from the extension if omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Copy a code block's source to the clipboard (OSC 52)
    Copy {
        /// Source file or Markdown page
        file: PathBuf,

        /// Which fenced block to copy from a Markdown page (1-based)
        #[arg(short, long, default_value_t = 1)]
        block: usize,
    },

    /// List supported languages
    Languages,
}
