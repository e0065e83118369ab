//! Settings file loading

use std::path::{Path, PathBuf};
use std::time::Duration;

use codeblock_annotate::{Annotator, DEFAULT_EMPHASIS_CLASS, RegionScope};
use codeblock_clipboard::COPY_RESET_AFTER;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// Settings file picked up from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "codeblock.toml";

/// User settings for rendering and copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether a highlight region may continue into the next block.
    pub region_scope: RegionScope,
    /// Class added to emphasized lines.
    pub emphasis_class: String,
    /// Render copy buttons without passing `--copy-button`.
    pub show_copy_button: bool,
    /// How long the copy confirmation lasts, in milliseconds.
    pub copy_reset_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region_scope: RegionScope::default(),
            emphasis_class: DEFAULT_EMPHASIS_CLASS.to_string(),
            show_copy_button: false,
            copy_reset_ms: COPY_RESET_AFTER.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Load settings from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::file(path, e))?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| CliError::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| CliError::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| CliError::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(CliError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Resolve settings for a run.
    ///
    /// An explicit path must exist. Without one, `codeblock.toml` in `cwd` is
    /// used if present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_SETTINGS_FILE);
                if !candidate.is_file() {
                    debug!("No settings file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "Loading settings");
        Self::load(&path)
    }

    /// An annotator configured from these settings.
    pub fn annotator(&self) -> Annotator {
        Annotator::with_scope(self.region_scope).with_emphasis_class(self.emphasis_class.clone())
    }

    pub fn copy_reset_after(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }
}
