//! Feed data handed to the terminal UI.
//!
//! Everything here is resident in memory before the UI loop starts: the
//! browser never fetches or parses feeds on its own.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_feeds_from_file, load_feeds_from_str};
pub use model::{Feed, Post, DEFAULT_MAX_POST_WORDS};
pub use validate::{messages, validate_feeds};
