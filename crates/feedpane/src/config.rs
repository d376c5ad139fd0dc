use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use feedpane_core::DEFAULT_MAX_POST_WORDS;
use feedpane_tui::DisplayOptions;
use serde::Deserialize;

use crate::cli::Cli;

const DEFAULT_SOURCES: &str = "data/sources.json";
const DEFAULT_SETTINGS: &str = "feedpane.json";
const DEFAULT_LOG_DIR: &str = "logs";

/// Load environment variables from .env files (best-effort).
/// Variables already set in the environment win.
pub fn load_dotenv() {
    // 1) current dir, 2) parent, 3) grandparent
    for path in [".env", "../.env", "../../.env"] {
        let _ = dotenvy::from_filename(path);
    }
}

/// Contents of the optional JSON settings file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct SettingsFile {
    #[serde(flatten)]
    display: DisplayOptions,
    max_post_words: usize,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            display: DisplayOptions::default(),
            max_post_words: DEFAULT_MAX_POST_WORDS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Feed list to browse; `None` starts with no feeds
    pub sources: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub display: DisplayOptions,
    pub max_post_words: usize,
}

impl Settings {
    /// Merge command line (and its env fallbacks), settings file and defaults
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.settings {
            Some(path) => load_settings_file(path)?,
            None if Path::new(DEFAULT_SETTINGS).exists() => load_settings_file(Path::new(DEFAULT_SETTINGS))?,
            None => SettingsFile::default(),
        };

        let mut display = file.display;
        if cli.no_color {
            display.color = false;
        }
        if cli.no_paragraphs {
            display.split_paragraphs = false;
        }

        let sources = cli.sources.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_SOURCES);
            default.exists().then_some(default)
        });

        Ok(Self {
            sources,
            log_dir: cli.log_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            display,
            max_post_words: file.max_post_words,
        })
    }
}

fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid settings in {}", path.display()))
}
