//! Pane-based terminal browser for feeds and their posts.
//!
//! The terminal is split into three bordered panes: a list on top, a detail
//! pane in the middle and the diagnostic log at the bottom. [`App`] drives one
//! render per key press and switches between browsing feeds and browsing the
//! posts of the selected feed.

pub mod app;
pub mod constants;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod handlers;
pub mod selection;
pub mod settings;
pub mod state;
pub mod types;
pub mod ui;
pub mod utils;

pub use app::App;
pub use cursor::BoundedCursor;
pub use diagnostics::DiagnosticLog;
pub use error::{LayoutError, RenderBoundsError, UiError};
pub use handlers::{InputHandler, KeySource, TerminalKeys};
pub use selection::{FeedSelection, PostSelection, Selection};
pub use settings::DisplayOptions;
pub use state::Navigator;
pub use types::{Action, Flow, NavigationState, ScrollDirection};
