use ratatui::layout::Rect;
use tracing::debug;

use super::pane::Pane;
use crate::constants::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::error::LayoutError;

/// The three full-width bands the terminal is split into.
#[derive(Debug, Clone)]
pub struct PaneSet {
    pub top: Pane,
    pub middle: Pane,
    pub bottom: Pane,
    height: u16,
    width: u16,
}

impl PaneSet {
    /// Whether these panes were built for a terminal of this size
    pub fn fits(&self, height: u16, width: u16) -> bool {
        self.height == height && self.width == width
    }

    pub fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }
}

pub struct LayoutManager;

impl LayoutManager {
    /// Split `height` rows into top (1/4), middle (1/2) and bottom (the rest)
    pub fn bands(height: u16) -> (u16, u16, u16) {
        let top = height / 4;
        let middle = height / 2;
        (top, middle, height - top - middle)
    }

    /// Build fresh panes for a terminal of `height` x `width` cells.
    pub fn compute_layout(height: u16, width: u16) -> Result<PaneSet, LayoutError> {
        if height < MIN_TERMINAL_HEIGHT || width < MIN_TERMINAL_WIDTH {
            return Err(LayoutError::TooSmall {
                height,
                width,
                min_height: MIN_TERMINAL_HEIGHT,
                min_width: MIN_TERMINAL_WIDTH,
            });
        }

        let screen = Rect::new(0, 0, width, height);
        let (top_h, middle_h, bottom_h) = Self::bands(height);
        debug!(height, width, top_h, middle_h, bottom_h, "Computing layout");

        Ok(PaneSet {
            top: Pane::new(top_h, width, 0, 0, screen)?,
            middle: Pane::new(middle_h, width, top_h, 0, screen)?,
            bottom: Pane::new(bottom_h, width, top_h + middle_h, 0, screen)?,
            height,
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_absorb_remainder_at_bottom() {
        assert_eq!(LayoutManager::bands(30), (7, 15, 8));
        assert_eq!(LayoutManager::bands(10), (2, 5, 3));
        assert_eq!(LayoutManager::bands(6), (1, 3, 2));
        assert_eq!(LayoutManager::bands(24), (6, 12, 6));
    }

    #[test]
    fn test_panes_stack_over_full_width() {
        let panes = LayoutManager::compute_layout(30, 80).unwrap();
        assert_eq!(panes.top.area(), Rect::new(0, 0, 80, 7));
        assert_eq!(panes.middle.area(), Rect::new(0, 7, 80, 15));
        assert_eq!(panes.bottom.area(), Rect::new(0, 22, 80, 8));
        assert!(panes.fits(30, 80));
        assert!(!panes.fits(10, 80));
    }

    #[test]
    fn test_too_small_terminal() {
        assert_eq!(
            LayoutManager::compute_layout(5, 80).unwrap_err(),
            LayoutError::TooSmall { height: 5, width: 80, min_height: 6, min_width: 4 }
        );
        assert!(LayoutManager::compute_layout(0, 0).is_err());
        assert!(LayoutManager::compute_layout(20, 3).is_err());
        assert!(LayoutManager::compute_layout(6, 4).is_ok());
    }

    #[test]
    fn test_resize_builds_new_panes() {
        let large = LayoutManager::compute_layout(30, 80).unwrap();
        let small = LayoutManager::compute_layout(10, 80).unwrap();
        assert_eq!(small.bottom.area(), Rect::new(0, 7, 80, 3));

        let mut panes = small;
        assert!(panes.middle.add_text(4, 1, "x", None).is_err());
        assert!(panes.middle.add_text(3, 1, "x", None).is_ok());
        assert_eq!(large.middle.height(), 15);
    }
}
