mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use cli::Cli;
use config::Settings;
use feedpane_core::{load_feeds_from_file, validate_feeds, Feed};
use feedpane_tui::constants::prefixes;
use feedpane_tui::{App, DiagnosticLog, TerminalKeys};

fn main() -> Result<()> {
    config::load_dotenv();
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    let log_file = logger::init_logging(&settings.log_dir)?;
    info!(log_file = %log_file.display(), ?settings, "Starting feedpane");

    let feeds = load_feeds(&settings)?;
    let diagnostics = DiagnosticLog::new();
    for warning in validate_feeds(&feeds) {
        diagnostics.append(format!("{} {}", prefixes::WARN, warning));
    }

    let mut terminal = setup_terminal()?;
    let result = run_application(&mut terminal, feeds, diagnostics, &settings);
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
    }
    info!("Feedpane stopped");

    Ok(())
}

fn load_feeds(settings: &Settings) -> Result<Vec<Feed>> {
    let Some(path) = settings.sources.as_ref() else {
        return Ok(Vec::new());
    };

    let mut feeds = load_feeds_from_file(path)?;
    for feed in &mut feeds {
        feed.truncate_post_descriptions(settings.max_post_words);
    }
    Ok(feeds)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_application<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    feeds: Vec<Feed>,
    diagnostics: DiagnosticLog,
    settings: &Settings,
) -> Result<()> {
    let mut app = App::new(feeds, diagnostics, settings.display);
    app.run(terminal, &mut TerminalKeys)
}
