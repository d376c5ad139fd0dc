use super::pane::Pane;
use super::styles::Styles;
use crate::constants::titles;
use crate::diagnostics::DiagnosticLog;
use crate::error::RenderBoundsError;
use crate::types::ScrollDirection;
use crate::utils::TextWrapper;

pub struct DebugView;

impl DebugView {
    /// Latest diagnostic messages, one per row from row 1.
    pub fn render(
        pane: &mut Pane,
        log: &DiagnosticLog,
        scroll: Option<ScrollDirection>,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        let (window, bounds, total) = log.window_with_bounds(pane.height(), scroll);

        // Scroll indicator only while looking away from the tail
        if scroll.is_some() && !window.is_empty() {
            pane.set_title(titles::debug_scrolled(bounds.start + 1, bounds.end, total));
        } else {
            pane.set_title(titles::DEBUG);
        }
        pane.clear();

        for (offset, message) in window.iter().enumerate() {
            let row = 1 + offset as u16;
            let text = TextWrapper::clean_line(message);
            pane.add_text(row, 1, &text, Some(styles.for_diagnostic(&text)))?;
        }
        Ok(())
    }
}
