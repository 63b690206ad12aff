use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use super::error::render_error;
use super::loading::render_loading;
use super::movie_grid::render_movie_grid;

/// Renders the results area: loader, error, grid or an empty frame
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.should_show_loader() {
        render_loading(frame, app, area);
        return;
    }

    if app.should_show_error() {
        render_error(frame, app, area);
        return;
    }

    if app.should_show_grid() {
        render_movie_grid(frame, app, area);
        return;
    }

    let title = match app.results_heading() {
        Some(heading) => format!(" {} ", heading),
        None => " Type a title and press Enter to search ".to_string(),
    };

    let empty_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default());

    frame.render_widget(empty_block, area);
}
