use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::model::Feed;

/// Load the feed list from a JSON file holding an array of feeds.
pub fn load_feeds_from_file(path: impl AsRef<Path>) -> Result<Vec<Feed>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading feeds from file");

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed sources from {}", path.display()))?;
    let feeds = load_feeds_from_str(&content)
        .with_context(|| format!("Invalid feed sources in {}", path.display()))?;

    info!(count = feeds.len(), path = %path.display(), "Loaded feeds");
    Ok(feeds)
}

pub fn load_feeds_from_str(content: &str) -> Result<Vec<Feed>> {
    let feeds: Vec<Feed> = serde_json::from_str(content)?;
    Ok(feeds)
}
