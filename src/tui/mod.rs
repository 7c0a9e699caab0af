//! Terminal User Interface for indra-tui

pub mod render;

use crate::app::{App, Event, Handler, PAGE_TITLE, Route, ViewState};
use crate::catalog::Loader;
use anyhow::Result;
use ratatui::crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI application.
///
/// Performs one activation (title, `doc` preference read, catalog fetch)
/// and loops until the user selects a model or quits. Returns the detail
/// route to navigate to, if a selection was made.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(app: &mut App, loader: &mut Loader) -> Result<Option<Route>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(PAGE_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);

    app.begin_activation();
    loader.activate();

    let result = run_loop(&mut terminal, app, loader, &event_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app.route())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    loader: &mut Loader,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => {
                // Only an outstanding activation may install a catalog;
                // Ready and Failed are terminal until the user reloads.
                if app.view == ViewState::Loading
                    && let Some(outcome) = loader.poll()
                {
                    app.resolve_fetch(outcome);
                }
            }
            Event::Key(key) => handle_key_event(app, loader, key),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, loader: &mut Loader, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter => app.confirm_selection(),
        KeyCode::Char('d') => app.open_docs(),
        KeyCode::Char('r') => {
            app.begin_activation();
            loader.activate();
        }
        _ => {}
    }
}
