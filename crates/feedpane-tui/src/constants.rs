/// Smallest terminal that still fits three bordered panes
pub const MIN_TERMINAL_HEIGHT: u16 = 6;
pub const MIN_TERMINAL_WIDTH: u16 = 4;

/// Rows and columns taken by a pane border on each axis
pub const BORDER_SIZE: u16 = 2;

pub const SELECTED_MARKER: &str = "> ";
pub const POSTS_HEADER: &str = "Posts:";

/// Diagnostic window shifts for PageUp / PageDown
pub const SCROLL_UP_SHIFT: isize = -1;
pub const SCROLL_DOWN_SHIFT: isize = 2;

pub mod prefixes {
    pub const INFO: &str = "INFO>";
    pub const WARN: &str = "WARN>";
    pub const ERR: &str = "ERR>";
}

pub mod titles {
    pub const FEEDS: &str = " Feeds  [Enter open · PgUp/PgDn log · q quit] ";
    pub const POSTS: &str = " Posts  [Backspace back · PgUp/PgDn log · q quit] ";
    pub const DESCRIPTION: &str = " Description ";
    pub const DEBUG: &str = " Debug ";

    /// Debug title while the window is scrolled: rows `first..=last` of `total`
    pub fn debug_scrolled(first: usize, last: usize, total: usize) -> String {
        format!("{}[{}-{}/{}] ", DEBUG, first, last, total)
    }
}

pub mod messages {
    pub const RESIZE: &str = "Window size error. Please resize.";
}
