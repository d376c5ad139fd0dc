use tracing::warn;

use crate::model::Feed;

pub mod messages {
    pub const NO_FEEDS: &str = "No feeds found.";
    pub const NO_POSTS: &str = "No posts found for feed:";
    pub const INCOMPLETE_POST: &str = "Post with missing title or content in feed:";
}

/// Check loaded feeds for gaps worth telling the user about.
///
/// Returns human-readable warnings in feed order; an empty result means
/// nothing looked wrong.
pub fn validate_feeds(feeds: &[Feed]) -> Vec<String> {
    let mut warnings = Vec::new();

    if feeds.is_empty() {
        warnings.push(messages::NO_FEEDS.to_string());
    }

    for feed in feeds {
        if feed.posts.is_empty() {
            warnings.push(format!("{} {}", messages::NO_POSTS, feed.title));
            continue;
        }

        for post in &feed.posts {
            if post.title.trim().is_empty() || post.description.trim().is_empty() {
                warnings.push(format!("{} {}", messages::INCOMPLETE_POST, feed.title));
            }
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}
