use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::constants::BORDER_SIZE;
use crate::error::{LayoutError, RenderBoundsError};

/// A bordered rectangle of the terminal with its own drawing surface.
///
/// Drawing only touches the pane's surface; nothing reaches the terminal
/// until [`Pane::flush`] copies it into the frame.
#[derive(Debug, Clone)]
pub struct Pane {
    area: Rect,
    surface: Buffer,
    title: Option<String>,
}

impl Pane {
    /// Create a pane of `height` x `width` cells at `(origin_y, origin_x)`
    /// inside `screen`. Fails if the pane is empty or sticks out of the screen.
    pub fn new(height: u16, width: u16, origin_y: u16, origin_x: u16, screen: Rect) -> Result<Self, LayoutError> {
        if height == 0 || width == 0 {
            return Err(LayoutError::EmptyRegion { height, width });
        }

        let fits = origin_y >= screen.y
            && origin_x >= screen.x
            && origin_y as u32 + height as u32 <= screen.bottom() as u32
            && origin_x as u32 + width as u32 <= screen.right() as u32;
        if !fits {
            return Err(LayoutError::OutOfScreen {
                height,
                width,
                y: origin_y,
                x: origin_x,
                screen_height: screen.height,
                screen_width: screen.width,
            });
        }

        let area = Rect::new(origin_x, origin_y, width, height);
        let mut pane = Self {
            area,
            surface: Buffer::empty(area),
            title: None,
        };
        pane.draw_border();
        Ok(pane)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    /// Rows available for text inside the border
    pub fn interior_rows(&self) -> u16 {
        self.area.height.saturating_sub(BORDER_SIZE)
    }

    /// Columns available for text inside the border
    pub fn interior_width(&self) -> u16 {
        self.area.width.saturating_sub(BORDER_SIZE)
    }

    /// Title drawn into the top border from the next clear on
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn draw_border(&mut self) {
        let mut block = Block::default().borders(Borders::ALL);
        if let Some(title) = &self.title {
            block = block.title(title.clone());
        }
        block.render(self.area, &mut self.surface);
    }

    /// Erase everything and redraw the border
    pub fn clear(&mut self) {
        self.surface.reset();
        self.draw_border();
    }

    /// Write `text` at interior row `y`, column `x` (both relative to the pane).
    ///
    /// Text running past the right border is cut off. A position on the
    /// border or outside the pane is an error.
    pub fn add_text(&mut self, y: u16, x: u16, text: &str, style: Option<Style>) -> Result<(), RenderBoundsError> {
        if !self.is_interior(y, x) {
            return Err(RenderBoundsError {
                y,
                x,
                height: self.area.height,
                width: self.area.width,
            });
        }

        // Last interior column is width - 2
        let max_width = (self.area.width - 1 - x) as usize;
        self.surface.set_stringn(
            self.area.x + x,
            self.area.y + y,
            text,
            max_width,
            style.unwrap_or_default(),
        );
        Ok(())
    }

    /// Copy the surface into the frame buffer.
    ///
    /// A pane built for a larger terminal no longer fits the frame and is
    /// refused; the caller rebuilds the layout instead.
    pub fn flush(&self, target: &mut Buffer) -> Result<(), LayoutError> {
        let frame = target.area;
        if frame.intersection(self.area) != self.area {
            return Err(LayoutError::OutOfScreen {
                height: self.area.height,
                width: self.area.width,
                y: self.area.y,
                x: self.area.x,
                screen_height: frame.height,
                screen_width: frame.width,
            });
        }

        target.merge(&self.surface);
        Ok(())
    }

    /// Text of row `y` as currently drawn on the surface, border included
    pub fn line(&self, y: u16) -> String {
        if y >= self.area.height {
            return String::new();
        }
        (0..self.area.width)
            .map(|x| {
                let index = self.surface.index_of(self.area.x + x, self.area.y + y);
                self.surface.content[index].symbol()
            })
            .collect()
    }

    fn is_interior(&self, y: u16, x: u16) -> bool {
        y >= 1 && x >= 1 && y + 1 < self.area.height && x + 1 < self.area.width
    }
}
