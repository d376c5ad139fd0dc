use serde::{Deserialize, Serialize};

/// Rendering variants, toggled by configuration rather than separate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Highlight the selected row and tint diagnostics
    pub color: bool,

    /// Split descriptions into paragraphs on runs of two or more spaces
    pub split_paragraphs: bool,

    /// Word-wrap post content instead of clipping each line
    pub wrap_post_content: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: true,
            split_paragraphs: true,
            wrap_post_content: true,
        }
    }
}
