use crate::app::{App, BackdropState};
use crate::app::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::movie_grid::rating_color;

/// Renders the detail overlay on top of everything drawn so far
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(movie) = app.overlay.movie().cloned() else {
        return;
    };

    // Dim whatever is behind the modal
    frame.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );

    let modal = centered_rect(area, 80, 85);
    frame.render_widget(Clear, modal);

    let outer_block = Block::default()
        .title(format!(" {} ", movie.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner_area = outer_block.inner(modal);
    frame.render_widget(outer_block, modal);

    let close_button = Rect::new(modal.right().saturating_sub(5), modal.y, 3, 1);
    frame.render_widget(
        Paragraph::new("[×]").style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        close_button,
    );
    app.hit_map.overlay = Some(modal);
    app.hit_map.close_button = Some(close_button);

    let image_height = match app.backdrop {
        BackdropState::Unavailable => 0,
        _ => inner_area.height / 2,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(image_height), // Backdrop
            Constraint::Min(6),               // Details
            Constraint::Length(1),            // Footer
        ])
        .split(inner_area);

    render_backdrop_section(frame, chunks[0], app);
    render_content_section(frame, chunks[1], &movie);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press (Esc) or (x) to close, or click outside",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

/// Renders the backdrop image section
fn render_backdrop_section(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    match &mut app.backdrop {
        BackdropState::Ready(protocol) => {
            let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
            frame.render_stateful_widget(image, area, protocol);
        }
        BackdropState::Loading => {
            render_placeholder(frame, area, "Downloading image...", Color::Cyan);
        }
        BackdropState::Failed | BackdropState::Unavailable => {
            render_placeholder(frame, area, "No image available", Color::Gray);
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(color))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(placeholder, area);
}

/// Renders title, overview, release date and rating
fn render_content_section(frame: &mut Frame, area: Rect, movie: &Movie) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let overview = if movie.overview.is_empty() {
        "No overview available."
    } else {
        movie.overview.as_str()
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            &movie.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(overview, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Release Date: ", label),
            Span::styled(movie.release_label(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(
                movie.rating_label(),
                Style::default()
                    .fg(rating_color(movie.vote_average))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(content_paragraph, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
