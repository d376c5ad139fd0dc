use feedpane_core::Post;

use super::components::{SelectableList, TextBlock};
use super::pane::Pane;
use super::styles::Styles;
use crate::constants::{titles, POSTS_HEADER};
use crate::error::RenderBoundsError;
use crate::settings::DisplayOptions;
use crate::utils::TextWrapper;

pub struct PostView;

impl PostView {
    /// "Posts:" header on row 1, entries from row 2
    pub fn render_post_list(
        pane: &mut Pane,
        posts: &[Post],
        selected: Option<usize>,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        pane.set_title(titles::POSTS);
        pane.clear();

        if pane.interior_rows() == 0 {
            return Ok(());
        }
        pane.add_text(1, 1, POSTS_HEADER, Some(styles.header()))?;
        SelectableList::render(pane, 2, posts.iter().map(|p| p.title.as_str()), selected, styles)
    }

    /// Body of the selected post from row 1, titled with the post title.
    pub fn render_post_content(
        pane: &mut Pane,
        post: Option<&Post>,
        options: &DisplayOptions,
        styles: &Styles,
    ) -> Result<(), RenderBoundsError> {
        let Some(post) = post else {
            pane.set_title(titles::DESCRIPTION);
            pane.clear();
            return Ok(());
        };

        pane.set_title(Self::content_title(post));
        pane.clear();

        let lines = if options.wrap_post_content {
            let width = pane.interior_width() as usize;
            TextWrapper::wrap_description(post.body(), width, options.split_paragraphs)
        } else {
            post.body().lines().map(|l| l.replace('\t', "    ")).collect()
        };
        TextBlock::render(pane, 1, &lines, styles.normal())
    }

    fn content_title(post: &Post) -> String {
        let title = TextWrapper::clean_line(&post.title);
        match (title.is_empty(), post.link.is_empty()) {
            (true, true) => titles::DESCRIPTION.to_string(),
            (false, true) => format!(" {} ", title),
            (true, false) => format!(" {} ", post.link),
            (false, false) => format!(" {} · {} ", title, post.link),
        }
    }
}
