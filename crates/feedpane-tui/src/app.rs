use anyhow::Result;
use crossterm::event::KeyEvent;
use feedpane_core::Feed;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, Terminal};
use tracing::{debug, warn};

use crate::constants::{messages, prefixes};
use crate::diagnostics::DiagnosticLog;
use crate::error::{LayoutError, UiError};
use crate::handlers::{InputHandler, KeySource};
use crate::settings::DisplayOptions;
use crate::state::Navigator;
use crate::types::{Action, Flow};
use crate::ui::{LayoutManager, PaneSet, Styles, UI};

/// The event loop: one render, then one blocking key read, until Quit.
pub struct App {
    navigator: Navigator,
    log: DiagnosticLog,
    options: DisplayOptions,
    styles: Styles,
    panes: Option<PaneSet>,
    last_layout_error: Option<LayoutError>,
}

impl App {
    pub fn new(feeds: Vec<Feed>, log: DiagnosticLog, options: DisplayOptions) -> Self {
        Self {
            navigator: Navigator::new(feeds),
            log,
            styles: Styles::new(&options),
            options,
            panes: None,
            last_layout_error: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    pub fn panes(&self) -> Option<&PaneSet> {
        self.panes.as_ref()
    }

    pub fn run<B: Backend, K: KeySource>(&mut self, terminal: &mut Terminal<B>, keys: &mut K) -> Result<()> {
        loop {
            self.draw(terminal)?;

            let Some(key) = keys.read_key()? else {
                continue;
            };
            if self.handle_key(key) == Flow::Quit {
                debug!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let action = InputHandler::classify(key);
        if action != Action::None {
            debug!(?action, state = ?self.navigator.state(), "Handling action");
        }
        self.navigator.handle(action)
    }

    /// Draw one frame, rebuilding the layout first if the terminal changed size
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.render(area, frame.buffer_mut());
        })?;
        Ok(())
    }

    fn render(&mut self, area: Rect, target: &mut Buffer) {
        self.refresh_layout(area);

        // A scroll request waits until there is a diagnostic pane to apply it to
        let Some(panes) = self.panes.as_mut() else {
            UI::draw_fallback(area, &self.log, &self.styles, target);
            return;
        };
        let scroll = self.navigator.take_scroll();

        let faults = UI::draw_content(panes, &self.navigator, &self.options, &self.styles, target);
        let stale = faults.iter().any(|f| matches!(f, UiError::Layout(_)));
        for fault in faults {
            self.log.append(format!("{} {}", prefixes::ERR, fault));
        }

        // Drawn last so faults from this pass are already in the log
        if let Err(fault) = UI::draw_debug(&mut panes.bottom, &self.log, scroll, &self.styles, target) {
            self.log.append(format!("{} {}", prefixes::ERR, fault));
        }

        if stale {
            // Rebuilt on the next iteration
            self.panes = None;
        }
    }

    fn refresh_layout(&mut self, area: Rect) {
        if self.panes.as_ref().is_some_and(|p| p.fits(area.height, area.width)) {
            return;
        }

        match LayoutManager::compute_layout(area.height, area.width) {
            Ok(panes) => {
                debug!(height = area.height, width = area.width, "Layout rebuilt");
                self.panes = Some(panes);
                self.last_layout_error = None;
            }
            Err(e) => {
                self.panes = None;
                if self.last_layout_error.as_ref() != Some(&e) {
                    warn!(error = %e, "Layout failed");
                    self.log.append(format!("{} {}", prefixes::WARN, messages::RESIZE));
                    self.log.append(format!("{} {}", prefixes::ERR, e));
                    self.last_layout_error = Some(e);
                }
            }
        }
    }
}
