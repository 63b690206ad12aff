use crate::app::App;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the search field with the TMDB attribution
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search_block = Block::default()
        .title(" Search ")
        .title_top(Line::from(" Powered by TMDB ").right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    let text = if app.input.buffer.is_empty() {
        Line::from(Span::styled(
            "Search movies...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(app.input.buffer.as_str())
    };

    frame.render_widget(Paragraph::new(text).block(search_block), area);

    if app.input.focused && !app.overlay.is_open() {
        frame.set_cursor_position(cursor_position(area, &app.input.buffer));
    }
}

/// Cell after the last typed character, kept inside the field's border
fn cursor_position(area: Rect, buffer: &str) -> Position {
    let typed = u16::try_from(buffer.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    let x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
    Position::new(x, area.y.saturating_add(1))
}
