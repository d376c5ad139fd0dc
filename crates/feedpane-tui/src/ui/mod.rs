mod components;
pub mod debug_view;
pub mod feed_view;
pub mod layout;
pub mod pane;
pub mod post_view;
pub mod styles;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::diagnostics::DiagnosticLog;
use crate::error::UiError;
use crate::settings::DisplayOptions;
use crate::state::Navigator;
use crate::types::{NavigationState, ScrollDirection};

pub use components::{SelectableList, TextBlock};
pub use debug_view::DebugView;
pub use feed_view::FeedView;
pub use layout::{LayoutManager, PaneSet};
pub use pane::Pane;
pub use post_view::PostView;
pub use styles::Styles;

pub struct UI;

impl UI {
    /// Render the list and detail panes for the current mode and flush them.
    ///
    /// Every fault is collected rather than returned early, so one broken
    /// pane does not blank the others.
    pub fn draw_content(
        panes: &mut PaneSet,
        navigator: &Navigator,
        options: &DisplayOptions,
        styles: &Styles,
        target: &mut Buffer,
    ) -> Vec<UiError> {
        let mut faults = Vec::new();

        let (list, detail) = match (navigator.state(), navigator.posts()) {
            (NavigationState::Posts, Some(posts)) => (
                PostView::render_post_list(&mut panes.top, posts.items(), posts.index(), styles),
                PostView::render_post_content(&mut panes.middle, posts.current(), options, styles),
            ),
            _ => {
                let feeds = navigator.feeds();
                (
                    FeedView::render_feed_list(&mut panes.top, feeds.items(), feeds.index(), styles),
                    FeedView::render_description(&mut panes.middle, feeds.current(), options, styles),
                )
            }
        };

        for result in [list, detail] {
            if let Err(e) = result {
                faults.push(e.into());
            }
        }
        for pane in [&panes.top, &panes.middle] {
            if let Err(e) = pane.flush(target) {
                faults.push(e.into());
            }
        }
        faults
    }

    /// Render and flush the diagnostic pane
    pub fn draw_debug(
        pane: &mut Pane,
        log: &DiagnosticLog,
        scroll: Option<ScrollDirection>,
        styles: &Styles,
        target: &mut Buffer,
    ) -> Result<(), UiError> {
        let rendered = DebugView::render(pane, log, scroll, styles);
        pane.flush(target)?;
        rendered?;
        Ok(())
    }

    /// Fallback when no layout fits: the newest diagnostics straight onto the screen
    pub fn draw_fallback(area: Rect, log: &DiagnosticLog, styles: &Styles, target: &mut Buffer) {
        let lines: Vec<Line> = log
            .visible_window(area.height.saturating_add(2), None)
            .into_iter()
            .rev()
            .map(|message| {
                let style = styles.for_diagnostic(&message);
                Line::styled(message, style)
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, target);
    }
}
