use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "feedpane=debug,feedpane_tui=debug,feedpane_core=debug";

/// Send tracing output to a timestamped file under `logs_dir`.
///
/// Nothing is written to the terminal: the TUI owns the screen.
pub fn init_logging(logs_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file = logs_dir.join(format!("feedpane_{}.log", timestamp));
    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_env("FEEDPANE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    Ok(log_file)
}
