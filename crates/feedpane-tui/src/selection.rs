use feedpane_core::{Feed, Post};
use tracing::debug;

use crate::cursor::BoundedCursor;

/// A sequence paired with a bounded cursor over it.
///
/// `current`, `advance` and `retreat` return the element under the cursor
/// after the move, or `None` when the sequence is empty.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    items: Vec<T>,
    cursor: BoundedCursor,
}

pub type FeedSelection = Selection<Feed>;
pub type PostSelection = Selection<Post>;

impl<T> Selection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let cursor = BoundedCursor::new(items.len());
        Self { items, cursor }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.index().and_then(|i| self.items.get(i))
    }

    pub fn advance(&mut self) -> Option<&T> {
        let index = self.cursor.advance();
        debug!(?index, len = self.items.len(), "Selection advanced");
        self.current()
    }

    pub fn retreat(&mut self) -> Option<&T> {
        let index = self.cursor.retreat();
        debug!(?index, len = self.items.len(), "Selection retreated");
        self.current()
    }
}
