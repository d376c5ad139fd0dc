use thiserror::Error;

/// The terminal or a region cannot hold the requested layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("terminal {height}x{width} is too small (need at least {min_height}x{min_width})")]
    TooSmall {
        height: u16,
        width: u16,
        min_height: u16,
        min_width: u16,
    },

    #[error("region {height}x{width} must have a positive size")]
    EmptyRegion { height: u16, width: u16 },

    #[error("region {height}x{width} at ({y}, {x}) does not fit the {screen_height}x{screen_width} screen")]
    OutOfScreen {
        height: u16,
        width: u16,
        y: u16,
        x: u16,
        screen_height: u16,
        screen_width: u16,
    },
}

/// Text was placed outside a region's interior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text at ({y}, {x}) is outside the interior of a {height}x{width} region")]
pub struct RenderBoundsError {
    pub y: u16,
    pub x: u16,
    pub height: u16,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    RenderBounds(#[from] RenderBoundsError),
}
