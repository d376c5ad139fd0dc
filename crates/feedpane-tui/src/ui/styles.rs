use ratatui::style::{Color, Modifier, Style};

use crate::constants::prefixes;
use crate::settings::DisplayOptions;

/// Normal and highlighted colour pairs, or plain text when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    color: bool,
}

impl Styles {
    pub fn new(options: &DisplayOptions) -> Self {
        Self { color: options.color }
    }

    pub fn normal(&self) -> Style {
        self.pick(Style::default().fg(Color::White))
    }

    pub fn highlight(&self) -> Style {
        self.pick(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn header(&self) -> Style {
        self.pick(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn for_diagnostic(&self, line: &str) -> Style {
        if line.starts_with(prefixes::ERR) {
            self.pick(Style::default().fg(Color::Red))
        } else if line.starts_with(prefixes::WARN) {
            self.pick(Style::default().fg(Color::Yellow))
        } else {
            self.normal()
        }
    }

    fn pick(&self, style: Style) -> Style {
        if self.color {
            style
        } else {
            Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorless_styles_are_plain() {
        let styles = Styles::new(&DisplayOptions {
            color: false,
            ..DisplayOptions::default()
        });
        assert_eq!(styles.highlight(), Style::default());
        assert_eq!(styles.for_diagnostic("ERR> boom"), Style::default());
    }

    #[test]
    fn test_diagnostic_prefixes() {
        let styles = Styles::new(&DisplayOptions::default());
        assert_eq!(styles.for_diagnostic("ERR> boom").fg, Some(Color::Red));
        assert_eq!(styles.for_diagnostic("WARN> hmm").fg, Some(Color::Yellow));
        assert_eq!(styles.for_diagnostic("fine"), styles.normal());
    }
}
