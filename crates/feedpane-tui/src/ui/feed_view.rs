use feedpane_core::Feed;

use super::components::{SelectableList, TextBlock};
use super::pane::Pane;
use super::styles::Styles;
use crate::constants::titles;
use crate::error::RenderBoundsError;
use crate::settings::DisplayOptions;
use crate::utils::TextWrapper;

pub struct FeedView;

impl FeedView {
    /// Feed titles one per row from row 1, the selected one marked with "> "
    pub fn render_feed_list(
        pane: &mut Pane,
        feeds: &[Feed],
        selected: Option<usize>,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        pane.set_title(titles::FEEDS);
        pane.clear();
        SelectableList::render(pane, 1, feeds.iter().map(|f| f.title.as_str()), selected, styles)
    }

    /// Wrapped description of the selected feed, paragraphs separated by a blank row.
    ///
    /// Lines that do not fit the pane are dropped; the pane does not scroll.
    pub fn render_description(
        pane: &mut Pane,
        feed: Option<&Feed>,
        options: &DisplayOptions,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        pane.set_title(titles::DESCRIPTION);
        pane.clear();

        let Some(feed) = feed else {
            return Ok(());
        };

        let width = pane.interior_width() as usize;
        let lines = TextWrapper::wrap_description(&feed.description, width, options.split_paragraphs);
        TextBlock::render(pane, 1, &lines, styles.normal())
    }
}
