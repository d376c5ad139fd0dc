use ratatui::style::Style;

use super::pane::Pane;
use super::styles::Styles;
use crate::constants::SELECTED_MARKER;
use crate::error::RenderBoundsError;
use crate::utils::TextWrapper;

/// A column of titles with one marked as selected.
pub struct SelectableList;

impl SelectableList {
    /// Draw `titles` from interior row `first_row` down, keeping `selected` in view.
    pub fn render<'a>(
        pane: &mut Pane,
        first_row: u16,
        titles: impl Iterator<Item = &'a str>,
        selected: Option<usize>,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        let last_row = pane.height().saturating_sub(2);
        if first_row > last_row {
            return Ok(());
        }

        let rows = (last_row - first_row + 1) as usize;
        let start = Self::window_start(selected, rows);

        for (offset, (idx, title)) in titles.enumerate().skip(start).take(rows).enumerate() {
            let row = first_row + offset as u16;
            let title = TextWrapper::clean_line(title);
            if Some(idx) == selected {
                pane.add_text(row, 1, &format!("{}{}", SELECTED_MARKER, title), Some(styles.highlight()))?;
            } else {
                pane.add_text(row, 1, &title, Some(styles.normal()))?;
            }
        }
        Ok(())
    }

    /// First item to draw so that `selected` lands on the last visible row at worst
    pub fn window_start(selected: Option<usize>, rows: usize) -> usize {
        match selected {
            Some(idx) if rows > 0 => idx.saturating_sub(rows - 1),
            _ => 0,
        }
    }
}

/// Pre-laid-out lines written top-down, clipped at the bottom border.
pub struct TextBlock;

impl TextBlock {
    pub fn render(pane: &mut Pane, first_row: u16, lines: &[String], style: Style) -> Result<(), RenderBoundsError> {
        let last_row = pane.height().saturating_sub(2);
        for (offset, line) in lines.iter().enumerate() {
            let row = first_row as usize + offset;
            if row > last_row as usize {
                break;
            }
            if line.is_empty() {
                continue;
            }
            pane.add_text(row as u16, 1, line, Some(style))?;
        }
        Ok(())
    }
}
