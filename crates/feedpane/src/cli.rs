use std::path::PathBuf;

use clap::Parser;

/// Browse feeds and their posts in the terminal
#[derive(Debug, Parser)]
#[command(name = "feedpane", version, about)]
pub struct Cli {
    /// JSON file with the feeds to browse
    #[arg(long, env = "FEEDPANE_SOURCES")]
    pub sources: Option<PathBuf>,

    /// JSON settings file
    #[arg(long, env = "FEEDPANE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, env = "FEEDPANE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable colour highlighting
    #[arg(long)]
    pub no_color: bool,

    /// Show descriptions as a single paragraph
    #[arg(long)]
    pub no_paragraphs: bool,
}
