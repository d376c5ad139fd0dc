use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::types::Action;

/// Where the event loop gets its keys from.
///
/// `read_key` blocks until the next event. Non-key events (resize, focus)
/// come back as `Ok(None)` so the caller redraws with the new terminal size.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Blocking keyboard input from the real terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) => {
                debug!(code = ?key.code, modifiers = ?key.modifiers, "Key pressed");
                Ok(Some(key))
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn classify(key: KeyEvent) -> Action {
        if !Self::is_valid_event(key) {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q') | KeyCode::Char('Q'), _) => Action::Quit,
            (KeyCode::Up, _) => Action::Up,
            (KeyCode::Down, _) => Action::Down,
            (KeyCode::Enter, _) => Action::Confirm,
            (KeyCode::Backspace, _) => Action::Back,
            (KeyCode::PageUp, _) => Action::PageUp,
            (KeyCode::PageDown, _) => Action::PageDown,
            _ => Action::None,
        }
    }

    fn is_valid_event(key: KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press)
    }
}
