use serde::{Deserialize, Deserializer, Serialize};

/// Word budget applied to post descriptions when nothing else is configured
pub const DEFAULT_MAX_POST_WORDS: usize = 150;

/// A subscribed feed and its entries, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website_link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feed_link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A single entry of a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Body text shown in the content pane; falls back to `description`
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl Feed {
    pub fn new(
        title: impl Into<String>,
        website_link: impl Into<String>,
        feed_link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            website_link: website_link.into(),
            feed_link: feed_link.into(),
            description: description.into(),
            posts: Vec::new(),
        }
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    /// Cut every post description down to `max_words` words
    pub fn truncate_post_descriptions(&mut self, max_words: usize) {
        for post in &mut self.posts {
            post.truncate_description(max_words);
        }
    }
}

impl Post {
    pub fn new(title: impl Into<String>, link: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Text for the content pane: the body when present, else the description
    pub fn body(&self) -> &str {
        if self.content.trim().is_empty() {
            &self.description
        } else {
            &self.content
        }
    }

    /// Truncate the description to at most `max_words` words, marking the cut with "..."
    pub fn truncate_description(&mut self, max_words: usize) {
        let words: Vec<&str> = self.description.split_whitespace().collect();
        if words.len() > max_words {
            self.description = format!("{}...", words[..max_words].join(" "));
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
