//! Codeblock CLI
//!
//! Renders code blocks annotated with highlight markers to HTML, shows how a
//! block will be emphasized, and copies block sources to the clipboard.

mod cli;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} Render highlighted code blocks", "codeblock".green().bold());
        println!();
        println!("Run {} for available commands.", "codeblock --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let mut settings = Settings::discover(cli.config.as_deref(), &cwd)?;
    if let Some(scope) = cli.region_scope.as_deref() {
        settings.region_scope = scope.parse()?;
    }

    execute_command(command, &settings)
}

fn execute_command(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::Render {
            file,
            language,
            copy_button,
            output,
        } => commands::run_render(
            &file,
            language.as_deref(),
            copy_button,
            output.as_deref(),
            settings,
        ),
        Commands::Annotate {
            file,
            language,
            json,
        } => commands::run_annotate(&file, language.as_deref(), json, settings),
        Commands::Copy { file, block } => commands::run_copy(&file, block, settings),
        Commands::Languages => commands::run_languages(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_parse_render_command() {
        let cli = Cli::parse_from(["codeblock", "render", "page.md", "--copy-button"]);
        assert_eq!(
            cli.command,
            Some(Commands::Render {
                file: "page.md".into(),
                language: None,
                copy_button: true,
                output: None,
            })
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "codeblock",
            "annotate",
            "train.py",
            "--json",
            "--region-scope",
            "shared",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.region_scope.as_deref(), Some("shared"));
    }

    #[test]
    fn test_copy_block_defaults_to_first() {
        let cli = Cli::parse_from(["codeblock", "copy", "page.md"]);
        assert_eq!(
            cli.command,
            Some(Commands::Copy {
                file: "page.md".into(),
                block: 1,
            })
        );
    }
}
