use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::constants::{BORDER_SIZE, SCROLL_DOWN_SHIFT, SCROLL_UP_SHIFT};
use crate::types::ScrollDirection;

/// Append-only record of operator-facing messages.
///
/// Clones share the same underlying log, so a loader running on another
/// thread can report into the same pane the render loop draws. Readers only
/// ever take a copied slice; no reference into the live log escapes a call.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, message: impl Into<String>) {
        let message = message.into();
        info!(target: "feedpane::diagnostics", "{}", message);
        self.lock().push(message);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Messages that fit a pane of `viewport_height` rows, oldest first.
    pub fn visible_window(&self, viewport_height: u16, scroll: Option<ScrollDirection>) -> Vec<String> {
        self.window_with_bounds(viewport_height, scroll).0
    }

    /// Same as [`visible_window`](Self::visible_window), plus the range of the
    /// full log it covers and the log length it was cut from.
    pub fn window_with_bounds(
        &self,
        viewport_height: u16,
        scroll: Option<ScrollDirection>,
    ) -> (Vec<String>, Range<usize>, usize) {
        let entries = self.lock();
        let bounds = window_bounds(entries.len(), viewport_height, scroll);
        (entries[bounds.clone()].to_vec(), bounds, entries.len())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Range of a `len`-entry log shown in a pane `viewport_height` rows tall.
///
/// Two rows go to the border. Without scrolling the window is the newest
/// `viewport_height - 2` entries; `Up` starts it one entry earlier and `Down`
/// two entries later, clamped to the log.
pub fn window_bounds(len: usize, viewport_height: u16, scroll: Option<ScrollDirection>) -> Range<usize> {
    let rows = viewport_height.saturating_sub(BORDER_SIZE) as usize;
    let shift = match scroll {
        None => 0,
        Some(ScrollDirection::Up) => SCROLL_UP_SHIFT,
        Some(ScrollDirection::Down) => SCROLL_DOWN_SHIFT,
    };

    let base = len as isize - rows as isize;
    let start = (base + shift).clamp(0, len as isize) as usize;
    let end = (start + rows).min(len);
    start..end
}
