/// Which list the top pane is browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Feeds,
    Posts,
}

/// Semantic input, decoupled from the raw key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Confirm,
    Back,
    PageUp,
    PageDown,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Whether the event loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
