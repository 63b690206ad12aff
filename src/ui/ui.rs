use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::footer::render_footer;
use super::header::render_header;
use super::main_content::render_main_content;
use super::movie_detail::render_movie_detail;
use super::notices::render_notices;
use super::pagination::render_pagination;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    app.hit_map.clear();
    let area = frame.area();

    let pagination_height = if app.should_show_pagination() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Search
            Constraint::Min(1),                    // Results
            Constraint::Length(pagination_height), // Page strip
            Constraint::Length(3),                 // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    if let Some(pagination) = app.pagination() {
        render_pagination(frame, app, pagination, chunks[2]);
    }
    render_footer(frame, app, chunks[3]);

    // Drawn last over the whole frame, whatever the layout above
    if app.overlay.is_open() {
        render_movie_detail(frame, app, area);
    }

    render_notices(frame, app, area);
}
