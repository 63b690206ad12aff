use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

/// Renders the result cards, scrolled so the cursor row stays visible
pub fn render_movie_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(
        " {} ({} on page {}) ",
        app.results_heading().unwrap_or_default(),
        app.search.results.len(),
        app.search.page
    );

    let outer_block = Block::default().title(title).borders(Borders::ALL);
    let inner = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1);
    let card_width = inner.width / columns;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    app.hit_map.grid_columns = columns as usize;

    let columns = columns as usize;
    let cursor_row = app.cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);
    let first_index = first_row * columns;
    let last_index = (first_index + visible_rows * columns).min(app.search.results.len());

    for index in first_index..last_index {
        let slot = index - first_index;
        let card = Rect {
            x: inner.x + (slot % columns) as u16 * card_width,
            y: inner.y + (slot / columns) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(inner.height),
        };

        let movie = &app.search.results[index];
        let selected = index == app.cursor;

        let border_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = vec![
            Line::from(Span::styled(
                movie.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                movie.release_year().unwrap_or_else(|| "—".to_string()),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::raw("★ "),
                Span::styled(
                    movie.rating_label(),
                    Style::default().fg(rating_color(movie.vote_average)),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(paragraph, card);
        app.hit_map.cards.push((card, index));
    }
}

/// Helper function to get color based on TMDB rating
pub fn rating_color(score: f64) -> Color {
    if score >= 7.0 {
        Color::Green
    } else if score >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
