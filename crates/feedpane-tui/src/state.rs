use feedpane_core::Feed;
use tracing::{debug, info};

use crate::selection::{FeedSelection, PostSelection};
use crate::types::{Action, Flow, NavigationState, ScrollDirection};

/// Two-mode controller: browsing feeds, or browsing one feed's posts.
///
/// The feed selection lives for the whole session. A post selection is
/// created on every entry into a feed and dropped on the way back, so
/// re-entering a feed always starts at its first post.
#[derive(Debug)]
pub struct Navigator {
    state: NavigationState,
    feeds: FeedSelection,
    posts: Option<PostSelection>,
    pending_scroll: Option<ScrollDirection>,
}

impl Navigator {
    pub fn new(feeds: Vec<Feed>) -> Self {
        Self {
            state: NavigationState::Feeds,
            feeds: FeedSelection::new(feeds),
            posts: None,
            pending_scroll: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn feeds(&self) -> &FeedSelection {
        &self.feeds
    }

    pub fn posts(&self) -> Option<&PostSelection> {
        self.posts.as_ref()
    }

    /// Scroll request for the next diagnostic render; cleared by reading it
    pub fn take_scroll(&mut self) -> Option<ScrollDirection> {
        self.pending_scroll.take()
    }

    pub fn pending_scroll(&self) -> Option<ScrollDirection> {
        self.pending_scroll
    }

    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::PageUp => self.pending_scroll = Some(ScrollDirection::Up),
            Action::PageDown => self.pending_scroll = Some(ScrollDirection::Down),
            Action::Up => self.move_selection(false),
            Action::Down => self.move_selection(true),
            Action::Confirm => self.enter_feed(),
            Action::Back => self.leave_feed(),
            Action::None => {}
        }
        Flow::Continue
    }

    fn move_selection(&mut self, forward: bool) {
        match (self.state, self.posts.as_mut()) {
            (NavigationState::Posts, Some(posts)) => {
                if forward {
                    posts.advance();
                } else {
                    posts.retreat();
                }
            }
            _ => {
                if forward {
                    self.feeds.advance();
                } else {
                    self.feeds.retreat();
                }
            }
        }
    }

    fn enter_feed(&mut self) {
        if self.state != NavigationState::Feeds {
            return;
        }

        let Some(feed) = self.feeds.current() else {
            debug!("Confirm ignored: no feed selected");
            return;
        };

        info!(feed = %feed.title, posts = feed.posts.len(), "Entering feed");
        self.posts = Some(PostSelection::new(feed.posts.clone()));
        self.state = NavigationState::Posts;
    }

    fn leave_feed(&mut self) {
        if self.state != NavigationState::Posts {
            return;
        }

        info!("Back to feed list");
        self.posts = None;
        self.state = NavigationState::Feeds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedpane_core::Post;

    fn feeds(titles: &[&str]) -> Vec<Feed> {
        titles
            .iter()
            .map(|t| {
                Feed::new(*t, "", "", "").with_posts(vec![
                    Post::new(format!("{} 1", t), "", ""),
                    Post::new(format!("{} 2", t), "", ""),
                ])
            })
            .collect()
    }

    #[test]
    fn test_starts_on_first_feed() {
        let nav = Navigator::new(feeds(&["A", "B", "C"]));
        assert_eq!(nav.state(), NavigationState::Feeds);
        assert_eq!(nav.feeds().index(), Some(0));
        assert!(nav.posts().is_none());
    }

    #[test]
    fn test_down_down_up_sequence() {
        let mut nav = Navigator::new(feeds(&["A", "B", "C"]));
        let mut seen = vec![nav.feeds().index().unwrap()];
        for action in [Action::Down, Action::Down, Action::Up] {
            nav.handle(action);
            seen.push(nav.feeds().index().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 1]);
    }

    #[test]
    fn test_confirm_back_keeps_feed_but_resets_posts() {
        let mut nav = Navigator::new(feeds(&["A", "B", "C"]));
        nav.handle(Action::Down);
        nav.handle(Action::Down);

        nav.handle(Action::Confirm);
        assert_eq!(nav.state(), NavigationState::Posts);
        nav.handle(Action::Down);
        assert_eq!(nav.posts().and_then(|p| p.index()), Some(1));
        assert_eq!(nav.feeds().index(), Some(2));

        nav.handle(Action::Back);
        assert_eq!(nav.state(), NavigationState::Feeds);
        assert_eq!(nav.feeds().index(), Some(2));
        assert!(nav.posts().is_none());

        nav.handle(Action::Confirm);
        assert_eq!(nav.posts().and_then(|p| p.index()), Some(0));
        assert_eq!(nav.posts().and_then(|p| p.current()).map(|p| p.title.as_str()), Some("C 1"));
    }

    #[test]
    fn test_up_down_in_posts_leave_feed_selection_alone() {
        let mut nav = Navigator::new(feeds(&["A", "B"]));
        nav.handle(Action::Confirm);
        nav.handle(Action::Down);
        nav.handle(Action::Down);
        assert_eq!(nav.feeds().index(), Some(0));
        assert_eq!(nav.posts().and_then(|p| p.index()), Some(1));
    }

    #[test]
    fn test_confirm_without_feeds_stays_put() {
        let mut nav = Navigator::new(Vec::new());
        assert_eq!(nav.handle(Action::Confirm), Flow::Continue);
        assert_eq!(nav.state(), NavigationState::Feeds);
    }

    #[test]
    fn test_back_and_confirm_are_noops_in_wrong_state() {
        let mut nav = Navigator::new(feeds(&["A"]));
        nav.handle(Action::Back);
        assert_eq!(nav.state(), NavigationState::Feeds);

        nav.handle(Action::Confirm);
        nav.handle(Action::Down);
        nav.handle(Action::Confirm);
        assert_eq!(nav.state(), NavigationState::Posts);
        assert_eq!(nav.posts().and_then(|p| p.index()), Some(1));
    }

    #[test]
    fn test_page_keys_scroll_in_any_state() {
        let mut nav = Navigator::new(feeds(&["A"]));
        nav.handle(Action::PageUp);
        assert_eq!(nav.take_scroll(), Some(ScrollDirection::Up));
        assert_eq!(nav.take_scroll(), None);

        nav.handle(Action::Confirm);
        nav.handle(Action::PageDown);
        assert_eq!(nav.state(), NavigationState::Posts);
        assert_eq!(nav.pending_scroll(), Some(ScrollDirection::Down));
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut nav = Navigator::new(feeds(&["A"]));
        assert_eq!(nav.handle(Action::Quit), Flow::Quit);
        nav.handle(Action::Confirm);
        assert_eq!(nav.handle(Action::Quit), Flow::Quit);
    }
}
