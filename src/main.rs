mod app;
use app::App;

mod config;
mod error;
mod logging;
mod ui;

use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

use crate::app::overlay::CloseReason;
use crate::app::tmdb::TmdbClient;
use crate::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    logging::init_tracing(&config);
    tracing::info!(
        base_url = %config.api_base_url,
        token_set = config.api_token.is_some(),
        "starting movie search"
    );
    if config.api_token.is_none() {
        tracing::warn!("TMDB_TOKEN is not set; every search will fail");
    }

    let client = TmdbClient::new(&config)?;

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Must run after entering raw mode and before the event loop reads stdin
    let picker = match Picker::from_query_stdio() {
        Ok(picker) => Some(picker),
        Err(err) => {
            tracing::warn!(error = ?err, "terminal image support unavailable");
            None
        }
    };

    let mut app = App::new(Arc::new(client), picker);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply whatever the fetch threads have finished
        app.poll_messages();
        app.on_tick();

        // Poll for events with a timeout to allow UI updates
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if handle_key(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }
}

/// Returns `true` when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Global listeners first, e.g. Escape while the detail overlay is open
    if app.on_global_key(key.code) {
        return false;
    }

    if app.overlay.is_open() {
        if let KeyCode::Char('x') = key.code {
            app.close_detail(CloseReason::CloseButton);
        }
        return false;
    }

    // Handle search input when the field is focused
    if app.input.focused {
        match key.code {
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => app.input.backspace(),
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.input.clear(),
            KeyCode::Tab => app.input.focused = false,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Tab => {
            app.input.focused = true;
        }
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_rows(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_rows(-1),
        KeyCode::Enter => app.select_current(),
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.previous_page(),
        _ => {}
    }
    false
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.move_cursor_rows(1),
        MouseEventKind::ScrollUp => app.move_cursor_rows(-1),
        _ => {}
    }
}
